//! End-to-end import tests over real CSV files.

use std::fs;
use std::io::Write;

use qbank_ingest::{IngestError, SourceFormat, import_file};
use qbank_model::{PublishStatus, QuestionRecord};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).expect("create file");
    file.write_all(contents.as_bytes()).expect("write file");
    path
}

#[test]
fn loosely_named_headers_resolve_across_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "upload.csv",
        "Question,Choices,Correct Answer,Topic,Test,Level\n\
         \"What is 2+2?\",\"4,5,6,7\",\"4\",Math,JEE,easy\n",
    );

    let outcome = import_file(&path).unwrap();
    assert_eq!(outcome.format, SourceFormat::Csv);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.records.len(), 1);

    let record = &outcome.records[0];
    assert_eq!(record.text, "What is 2+2?");
    assert_eq!(record.options, vec!["4", "5", "6", "7"]);
    assert_eq!(record.answer, "4");
    assert_eq!(record.subject, "Math");
    assert_eq!(record.exam, "JEE");
    assert_eq!(record.difficulty, "easy");
    assert!(record.tags.is_empty());
    assert_eq!(record.marks, 1);
    assert_eq!(record.time_limit, 60);
    assert_eq!(record.blooms, "remember");
    assert_eq!(record.publish_status, PublishStatus::Draft);
    // "Topic" also satisfies the topic keyword scan.
    assert_eq!(record.topic, "Math");
}

#[test]
fn canonical_headers_pass_through_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "canonical.csv",
        "text,options,answer,subject,exam,difficulty,tags,marks,timeLimit,blooms\n\
         Which planet is largest?,\"Mars,Jupiter,Venus,Earth\",Jupiter,Science,NEET,hard,\"space;planets\",4,90,understand\n",
    );

    let outcome = import_file(&path).unwrap();
    let expected = QuestionRecord {
        text: "Which planet is largest?".to_string(),
        options: vec![
            "Mars".to_string(),
            "Jupiter".to_string(),
            "Venus".to_string(),
            "Earth".to_string(),
        ],
        answer: "Jupiter".to_string(),
        subject: "Science".to_string(),
        exam: "NEET".to_string(),
        difficulty: "hard".to_string(),
        tags: vec!["space".to_string(), "planets".to_string()],
        marks: 4,
        time_limit: 90,
        blooms: "understand".to_string(),
        category: String::new(),
        topic: String::new(),
        solution: String::new(),
        publish_status: PublishStatus::Draft,
    };
    assert_eq!(outcome.records, vec![expected]);
}

#[test]
fn option_columns_and_option_reference_answer() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "columns.csv",
        "Question,optionB,optionA,optionD,optionC,Answer,Options\n\
         Pick the second number,2,1,4,3,Option B,\"w,x,y,z\"\n",
    );

    let outcome = import_file(&path).unwrap();
    let record = &outcome.records[0];
    assert_eq!(record.options, vec!["1", "2", "3", "4"]);
    assert_eq!(record.answer, "2");
}

#[test]
fn importing_twice_yields_identical_batches() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "twice.csv",
        "Question,Answer,Marks\nWhat is 2+2?,4,abc\nWhat is 3+3?,6,2\n",
    );

    let first = import_file(&path).unwrap();
    let second = import_file(&path).unwrap();
    assert_eq!(first.records, second.records);
    assert_eq!(first.records[0].marks, 1);
    assert_eq!(first.records[1].marks, 2);
}

#[test]
fn malformed_json_options_fall_back_to_comma_split() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "json.csv",
        "Question,Options,Answer\nWhat comes first?,\"[1,2,3\",1\n",
    );

    let outcome = import_file(&path).unwrap();
    assert_eq!(outcome.records[0].options, vec!["[1", "2", "3"]);
}

#[test]
fn unresolvable_text_uses_placeholder() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bare.csv", "A,B\nx,y\n");

    let outcome = import_file(&path).unwrap();
    assert_eq!(outcome.records[0].text, "Question text not found");
    assert_eq!(outcome.records[0].answer, "Answer not found");
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "diagram.png", "not really a png");

    let result = import_file(&path);
    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}

#[test]
fn corrupt_spreadsheet_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.xlsx", "this is not a workbook");

    let result = import_file(&path);
    assert!(matches!(result, Err(IngestError::Workbook { .. })));
}
