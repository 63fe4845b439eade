use std::fs::File;
use std::io::{BufReader, Write};

use taglex::{
    Aggregator, Corpus, CorpusStats, LexiconEntry, SentenceReader, Silent, rank, read_lexicon,
};
use tempfile::NamedTempFile;

const COOKED: &str = "\
The DT can MD rust VB .  .
A DT can NN of IN fish NN can MD rust VB .  .
They PRP fish VB  .  .
\tfish NN can VB  fish NN
";

fn corpus_from(text: &str) -> Corpus {
    corpus_from_bytes(text.as_bytes())
}

fn corpus_from_bytes(text: &[u8]) -> Corpus {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(text).unwrap();
    let reader = BufReader::new(File::open(file.path()).unwrap());

    let mut agg = Aggregator::new();
    SentenceReader::new(Silent)
        .read_into(reader, &mut agg)
        .expect("read corpus");
    agg.finish()
}

fn lexicon_text(corpus: &Corpus, with_counts: bool) -> String {
    let mut out = Vec::new();
    rank(corpus, with_counts)
        .expect("consistent corpus")
        .write_to(&mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn report_text(corpus: &Corpus) -> String {
    let lexicon = rank(corpus, false).unwrap();
    let mut out = Vec::new();
    CorpusStats::compute(corpus, &lexicon)
        .write_report(&mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn two_sentence_example() {
    let corpus = corpus_from("dog N run V\ndog N\n");
    assert_eq!(corpus.word_count("dog"), Some(2));
    assert_eq!(corpus.word_count("run"), Some(1));
    assert_eq!(corpus.tag_count("N"), Some(2));
    assert_eq!(corpus.tag_count("V"), Some(1));

    assert_eq!(lexicon_text(&corpus, false), "dog N 2\nrun V 1\n");
    assert_eq!(
        report_text(&corpus),
        "2 tags 2 types 3 tokens\n\
         \x20 1         2 100.000%         3 100.000% \n\
         Mean ambiguity A=1.000000\n\
         \n\
         Entropy H(p)=0.918296\n"
    );
}

#[test]
fn ranks_ambiguous_words() {
    let corpus = corpus_from(COOKED);
    let text = lexicon_text(&corpus, true);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            ". 3 . 3",
            "A 1 DT 1",
            "The 1 DT 1",
            "They 1 PRP 1",
            "can 4 MD 2 NN 1 VB 1",
            "fish 4 NN 3 VB 1",
            "of 1 IN 1",
            "rust 2 VB 2",
        ]
    );
}

#[test]
fn output_reads_back_as_the_same_counts() {
    let corpus = corpus_from(COOKED);
    let text = lexicon_text(&corpus, true);
    let entries = read_lexicon(text.as_bytes(), true).unwrap();

    assert_eq!(entries.len(), corpus.word_types());
    for entry in &entries {
        assert_eq!(entry.count, corpus.word_count(&entry.word));
        assert_eq!(Some(entry.total()), entry.count);
        for tag in &entry.tags {
            assert_eq!(corpus.joint_count(&entry.word, &tag.tag), Some(tag.freq));
        }
    }
    let words: Vec<&[u8]> = entries.iter().map(|e| e.word.as_slice()).collect();
    let mut sorted = words.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(words, sorted);
}

#[test]
fn rerunning_is_deterministic() {
    let first = corpus_from(COOKED);
    let second = corpus_from(COOKED);
    assert_eq!(first, second);
    assert_eq!(lexicon_text(&first, true), lexicon_text(&second, true));
    assert_eq!(report_text(&first), report_text(&second));
}

#[test]
fn doubling_the_input_doubles_counts_and_keeps_order() {
    let single = corpus_from(COOKED);
    let double = corpus_from(&format!("{COOKED}{COOKED}"));

    assert_eq!(double.tokens(), 2 * single.tokens());
    assert_eq!(double.sentences(), 2 * single.sentences());

    let once = rank(&single, true).unwrap();
    let twice = rank(&double, true).unwrap();
    for (a, b) in once.entries().iter().zip(twice.entries()) {
        let scaled = LexiconEntry {
            word: a.word.clone(),
            count: a.count.map(|c| c * 2),
            tags: a
                .tags
                .iter()
                .map(|t| taglex::TagFreq::new(t.tag.as_slice(), t.freq * 2))
                .collect(),
        };
        assert_eq!(&scaled, b);
    }
    assert_eq!(once.entries().len(), twice.entries().len());
    assert_eq!(once.ambiguity().max_degree(), twice.ambiguity().max_degree());
}

#[test]
fn ambiguity_table_rows() {
    let corpus = corpus_from("can MD can NN fish NN\ncan MD fish VB fish NN\n");
    let report = report_text(&corpus);
    let rows: Vec<&str> = report.lines().collect();
    assert_eq!(rows[0], "3 tags 2 types 6 tokens");
    assert_eq!(rows[1], "  1         0   0.000%         0   0.000% ");
    assert_eq!(rows[2], "  2         2 100.000%         6 100.000% ");
    assert_eq!(rows[3], "Mean ambiguity A=2.000000");
}

#[test]
fn latin1_corpus_passes_through_unchanged() {
    let corpus = corpus_from_bytes(b"Die ART Stra\xdfe NN ist VAFIN gr\xfcn ADJD\nDie ART Stra\xdfe NN\n");
    assert_eq!(corpus.word_count(b"Stra\xdfe"), Some(2));

    let mut out = Vec::new();
    rank(&corpus, false).unwrap().write_to(&mut out).unwrap();
    assert_eq!(
        out,
        b"Die ART 2\nStra\xdfe NN 2\ngr\xfcn ADJD 1\nist VAFIN 1\n".to_vec()
    );

    let entries = read_lexicon(out.as_slice(), false).unwrap();
    assert_eq!(entries[1].word, b"Stra\xdfe");
}

#[test]
fn non_breaking_space_does_not_split_tokens() {
    let corpus = corpus_from("10\u{a0}000 CD Euro NN\n");
    assert_eq!(corpus.tokens(), 2);
    assert_eq!(corpus.joint_count("10\u{a0}000", "CD"), Some(1));
    assert_eq!(lexicon_text(&corpus, false), "10\u{a0}000 CD 1\nEuro NN 1\n");
}
