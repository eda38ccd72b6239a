//! Reference sentences, one row per sentence, written in all four scripts.

/// `(devanagari, bengali, iast, itrans)` for text read from Devanagari.
pub(crate) const DEVANAGARI_ROWS: &[(&str, &str, &str, &str)] = &[
    ("विश्व", "বিশ্ব", "viśva", "vishva"),
    ("चरणध्वनि", "চরণধ্বনি", "caraṇadhvani", "charaNadhvani"),
    ("अंग", "অংগ", "aṃga", "aMga"),
    ("बारो", "বারো", "bāro", "bAro"),
    ("भक्ति", "ভক্তি", "bhakti", "bhakti"),
    (
        "पिता बऽले येन जानि,",
        "পিতা বঽলে যেন জানি,",
        "pitā ba'le yena jāni,",
        "pitA ba.ale yena jAni,",
    ),
    (
        " चारि दिके मोर वसन्त हसित, यौवनकुसुम प्राणे विकशित, कुसुमेरऽपरे फेलिब चरण यौवनमाधुरीभरे।",
        " চারি দিকে মোর বসন্ত হসিত, যৌবনকুসুম প্রাণে বিকশিত, কুসুমেরঽপরে ফেলিব চরণ যৌবনমাধুরীভরে।",
        " cāri dike mora vasanta hasita, yauvanakusuma prāṇe vikaśita, kusumera'pare pheliba caraṇa yauvanamādhurībhare.",
        " chAri dike mora vasanta hasita, yauvanakusuma prANe vikashita, kusumera.apare pheliba charaNa yauvanamAdhurIbhare.",
    ),
    (
        "आत्मवि\u{095C}म्बन दारुण लज्जा, निःशेषे याक से थेमे।",
        "আত্মবি\u{09DC}ম্বন দারুণ লজ্জা, নিঃশেষে যাক সে থেমে।",
        "ātmavir̤ambana dāruṇa lajjā, niḥśeṣe yāka se theme.",
        "Atmavi.Dambana dAruNa lajjA, niHsheShe yAka se theme.",
    ),
    ("क्", "ক্", "k", "k"),
];

/// `(bengali, devanagari, iast, itrans)` for text read from Bengali. The
/// Devanagari column is the corrected spelling, after ambiguity resolution.
pub(crate) const BENGALI_ROWS: &[(&str, &str, &str, &str)] = &[
    ("বিশ্ব", "विश्व", "biśva", "bishva"),
    ("চরণধ্বনি", "चरणध्वनि", "caraṇadhvani", "charaNadhvani"),
    ("অংগ", "अंग", "aṃga", "aMga"),
    ("বারো", "बारो", "bāro", "bAro"),
    ("ভক্তি", "भक्ति", "bhakti", "bhakti"),
    (
        "পিতা বঽলে যেন জানি,",
        "पिता बऽले येन जानि,",
        "pitā ba'le yena jāni,",
        "pitA ba.ale yena jAni,",
    ),
    (
        " চারি দিকে মোর বসন্ত হসিত, যৌবনকুসুম প্রাণে বিকশিত, কুসুমেরঽপরে ফেলিব চরণ যৌবনমাধুরীভরে।",
        " चारि दिके मोर वसन्त हसित, यौवनकुसुम प्राणे विकशित, कुसुमेरऽपरे फेलिब चरण यौवनमाधुरीभरे।",
        " cāri dike mora basanta hasita, yaubanakusuma prāṇe bikaśita, kusumera'pare pheliba caraṇa yaubanamādhurībhare.",
        " chAri dike mora basanta hasita, yaubanakusuma prANe bikashita, kusumera.apare pheliba charaNa yaubanamAdhurIbhare.",
    ),
    (
        "আত্মবি\u{09DC}ম্বন দারুণ লজ্জা, নিঃশেষে যাক সে থেমে।",
        "आत्मवि\u{095C}म्बन दारुण लज्जा, निःशेषे याक से थेमे।",
        "ātmabir̤ambana dāruṇa lajjā, niḥśeṣe yāka se theme.",
        "Atmabi.Dambana dAruNa lajjA, niHsheShe yAka se theme.",
    ),
    ("ক্", "क्", "k", "k"),
];

/// Oracle that answers with the reference Devanagari spelling of every
/// Bengali row and echoes the prompt the way a seq2seq model does.
pub(crate) struct ReferenceOracle;

impl crate::resolver::CorrectionOracle for ReferenceOracle {
    fn correct(
        &self,
        original: &str,
        heuristic: &str,
    ) -> Result<String, crate::resolver::OracleError> {
        let corrected = BENGALI_ROWS
            .iter()
            .find(|row| row.0 == original)
            .map_or(heuristic, |row| row.1);
        Ok(format!(
            "{}{corrected}",
            crate::resolver::build_prompt(original, heuristic)
        ))
    }
}
