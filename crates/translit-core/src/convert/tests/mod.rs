mod proptest_convert;

use crate::table::{IndicForms, RomanForms, TableSet};
use crate::trie::PrefixTrie;

/// Tries over the embedded default tables.
pub(super) struct TestTries {
    pub devanagari: PrefixTrie<IndicForms>,
    pub bengali: PrefixTrie<IndicForms>,
    pub iast: PrefixTrie<RomanForms>,
    pub itrans: PrefixTrie<RomanForms>,
}

pub(super) fn test_tries() -> TestTries {
    let set = TableSet::embedded().unwrap();
    TestTries {
        devanagari: PrefixTrie::from_table(set.devanagari),
        bengali: PrefixTrie::from_table(set.bengali),
        iast: PrefixTrie::from_table(set.iast),
        itrans: PrefixTrie::from_table(set.itrans),
    }
}
