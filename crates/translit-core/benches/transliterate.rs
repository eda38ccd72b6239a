use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use translit_core::table::TableSet;
use translit_core::{Script, Transliterator};

const DEVANAGARI_INPUTS: &[(&str, &str)] = &[
    ("word", "विश्व"),
    ("phrase", "पिता बऽले येन जानि,"),
    (
        "sentence",
        "चारि दिके मोर वसन्त हसित, यौवनकुसुम प्राणे विकशित, कुसुमेरऽपरे फेलिव चरण यौवनमाधुरीभरे।",
    ),
];

const BENGALI_INPUTS: &[(&str, &str)] = &[
    ("word", "বিশ্ব"),
    ("phrase", "পিতা বঽলে যেন জানি,"),
    (
        "sentence",
        "চারি দিকে মোর বসন্ত হসিত, যৌবনকুসুম প্রাণে বিকশিত, কুসুমেরঽপরে ফেলিব চরণ যৌবনমাধুরীভরে।",
    ),
];

const IAST_INPUTS: &[(&str, &str)] = &[
    ("word", "viśva"),
    ("phrase", "pitā ba'le yena jāni,"),
    ("compound", "ātmaviḍambana dāruṇa lajjā"),
];

fn engine() -> Transliterator {
    Transliterator::new(TableSet::embedded().expect("embedded tables"))
}

fn bench_from(
    c: &mut Criterion,
    group_name: &str,
    from: Script,
    targets: &[Script],
    inputs: &[(&str, &str)],
) {
    let t = engine();
    let mut group = c.benchmark_group(group_name);
    for &to in targets {
        for &(label, text) in inputs {
            let id = BenchmarkId::new(format!("{to}/{label}"), text.len());
            group.bench_with_input(id, &text, |b, &text| {
                b.iter(|| t.convert(from, to, text));
            });
        }
    }
    group.finish();
}

fn bench_devanagari(c: &mut Criterion) {
    bench_from(
        c,
        "transliterate/devanagari",
        Script::Devanagari,
        &[Script::Bengali, Script::Iast, Script::Itrans],
        DEVANAGARI_INPUTS,
    );
}

fn bench_bengali(c: &mut Criterion) {
    bench_from(
        c,
        "transliterate/bengali",
        Script::Bengali,
        &[Script::Devanagari, Script::Iast],
        BENGALI_INPUTS,
    );
}

fn bench_iast(c: &mut Criterion) {
    bench_from(
        c,
        "transliterate/iast",
        Script::Iast,
        &[Script::Devanagari, Script::Bengali],
        IAST_INPUTS,
    );
}

fn bench_table_load(c: &mut Criterion) {
    c.bench_function("tables/embedded", |b| {
        b.iter(|| Transliterator::new(TableSet::embedded().expect("embedded tables")));
    });
}

criterion_group!(
    benches,
    bench_devanagari,
    bench_bengali,
    bench_iast,
    bench_table_load
);
criterion_main!(benches);
