use complaint_intel::batch::{score_path, score_reader, write_results, BatchError, BatchSummary};
use std::path::PathBuf;
use complaint_intel::scoring::{Priority, Risk};

const EXPORT: &str = "Id,Text,Category,Channel,Customer Tier,Order Value,Repeat\n\
C-1,Screen arrived shattered,Defect,Voice,VIP,1200,yes\n\
,Parcel late,Delivery,Email,Standard,,no\n\
C-3,,Other,Chat,Standard,0,\n";

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("complaint-intel-{}-{name}", std::process::id()))
}

#[test]
fn batch_scores_rows_in_input_order() {
    let rows = score_reader(EXPORT.as_bytes()).expect("batch scores");

    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].id, "C-1");
    assert_eq!(rows[0].result.total_score, 100);
    assert_eq!(rows[0].result.priority, Priority::P1);
    assert_eq!(
        rows[0].result.reasons,
        vec![
            "Category: Defect",
            "Keyword: \"shattered\"",
            "Repeat Issue",
            "VIP Customer",
            "Order Value > $1000",
        ]
    );

    assert_eq!(rows[1].id, "row-2");
    assert_eq!(rows[1].result.total_score, 30);
    assert_eq!(rows[1].result.severity.level(), 2);
    assert_eq!(rows[1].result.risk, Risk::Low);

    assert_eq!(rows[2].id, "C-3");
    assert_eq!(rows[2].result.total_score, 10);
    assert!(rows[2].result.reasons.is_empty());
}

#[test]
fn batch_summary_counts_risk_and_priority() {
    let rows = score_reader(EXPORT.as_bytes()).expect("batch scores");

    let summary = BatchSummary::from_rows(&rows);

    assert_eq!(summary.total, 3);
    assert_eq!(summary.high_risk, 1);
    assert_eq!(summary.medium_risk, 0);
    assert_eq!(summary.low_risk, 2);
    assert_eq!(summary.by_priority, [1, 0, 0, 2]);
}

#[test]
fn written_results_round_out_the_export() {
    let rows = score_reader(EXPORT.as_bytes()).expect("batch scores");
    let mut output = Vec::new();

    write_results(&mut output, &rows).expect("results written");

    let mut reader = csv::Reader::from_reader(output.as_slice());
    let headers = reader.headers().expect("header row").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "total_score", "severity", "priority", "risk", "reasons"]
    );

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("records parse");
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][0], "C-1");
    assert_eq!(&records[0][3], "P1");
    assert_eq!(&records[0][4], "High");
    assert!(records[0][5].starts_with("Category: Defect; Keyword: \"shattered\""));
    assert_eq!(&records[2][5], "");
}

#[test]
fn ragged_rows_are_rejected() {
    let csv = "Text,Category\nParcel missing,Delivery,extra\n";

    let err = score_reader(csv.as_bytes()).expect_err("ragged csv rejected");

    assert!(matches!(err, BatchError::Csv(_)));
}

#[test]
fn batch_scores_csv_file_from_disk() {
    let path = scratch_path("export.csv");
    std::fs::write(&path, EXPORT).expect("export written");

    let rows = score_path(&path).expect("file scores");
    std::fs::remove_file(&path).ok();

    assert_eq!(rows, score_reader(EXPORT.as_bytes()).expect("batch scores"));
    assert_eq!(rows[0].id, "C-1");
}

#[test]
fn missing_batch_file_names_the_path() {
    let path = scratch_path("missing.csv");

    let err = score_path(&path).expect_err("missing file rejected");

    match err {
        BatchError::Io { path: reported, source } => {
            assert_eq!(reported, path.display().to_string());
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected io error, got {other:?}"),
    }
}
