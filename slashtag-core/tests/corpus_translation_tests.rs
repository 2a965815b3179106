// slashtag-core/tests/corpus_translation_tests.rs
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use slashtag_core::{
    compile_rules, translate_file, DocumentOptions, RuleEngine, SlashtagError, TalkBankReader,
};

const TRANSCRIPT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CHAT xmlns="http://www.talkbank.org/ns/talkbank" Lang="eng">
  <u who="CHI" uID="u0">
    <w>dog<mor type="mor"><mw><pos><c>n</c></pos><stem>dog</stem></mw></mor></w>
    <w>go<mor type="mor"><mw><pos><c>v</c></pos><stem>go</stem></mw></mor></w>
    <t type="p"/>
  </u>
  <u who="MOT" uID="u1">
    <w>Paris<mor type="mor"><mw><pos><c>n</c><s>prop</s></pos><stem>Paris</stem></mw></mor></w>
    <w>some<mor type="mor"><mw><pos><c>pro</c><s>indef</s></pos><stem>some</stem><mk type="sfx">PL</mk></mw></mor></w>
    <t type="p"/>
  </u>
</CHAT>"#;

fn engine() -> RuleEngine {
    RuleEngine::new(
        compile_rules([("n", "NOUN"), ("n:prop", "PROPN"), ("pro:indef-PL", "INDEFPL")]).unwrap(),
    )
}

#[test_log::test]
fn test_transcript_to_slash_tags() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(TRANSCRIPT.as_bytes())?;

    let options = DocumentOptions {
        speaker: None,
        speaker_labels: true,
    };
    let lines = translate_file(&engine(), &TalkBankReader::new(), file.path(), &options)?;
    assert_eq!(lines, vec!["CHI: dog/NOUN go/v", "MOT: Paris/PROPN some/INDEFPL"]);
    Ok(())
}

#[test]
fn test_speaker_filter_without_labels() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(TRANSCRIPT.as_bytes())?;

    let options = DocumentOptions {
        speaker: Some("CHI".to_string()),
        speaker_labels: false,
    };
    let lines = translate_file(&engine(), &TalkBankReader::new(), file.path(), &options)?;
    assert_eq!(lines, vec!["dog/NOUN go/v"]);
    Ok(())
}

#[test]
fn test_unreadable_corpus_is_not_fatal() {
    let err = translate_file(
        &engine(),
        &TalkBankReader::new(),
        Path::new("/no/such/corpus.xml"),
        &DocumentOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SlashtagError::CorpusRead { .. }));
    assert!(!err.is_fatal());
}
