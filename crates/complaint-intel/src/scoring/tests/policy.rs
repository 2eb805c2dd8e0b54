use crate::scoring::{Priority, Risk, Severity};

#[test]
fn severity_boundaries() {
    let cases = [
        (0, 1),
        (29, 1),
        (30, 2),
        (49, 2),
        (50, 3),
        (69, 3),
        (70, 4),
        (89, 4),
        (90, 5),
        (100, 5),
    ];

    for (score, level) in cases {
        assert_eq!(Severity::from_score(score).level(), level, "score {score}");
    }
}

#[test]
fn priority_and_risk_follow_severity() {
    let expected = [
        (1, Priority::P4, Risk::Low),
        (2, Priority::P4, Risk::Low),
        (3, Priority::P3, Risk::Medium),
        (4, Priority::P2, Risk::High),
        (5, Priority::P1, Risk::High),
    ];

    for (level, priority, risk) in expected {
        let severity = Severity::new(level).expect("valid severity");
        assert_eq!(severity.priority(), priority);
        assert_eq!(severity.risk(), risk);
    }
}

#[test]
fn severity_rejects_out_of_range_levels() {
    assert!(Severity::new(0).is_none());
    assert!(Severity::new(6).is_none());
    assert!(Severity::try_from(7u8).is_err());
}

#[test]
fn severity_serializes_as_plain_integer() {
    let json = serde_json::to_string(&Severity::from_score(75)).expect("serializes");
    assert_eq!(json, "4");

    let parsed: Result<Severity, _> = serde_json::from_str("9");
    assert!(parsed.is_err());
}

#[test]
fn labels_match_dashboard_vocabulary() {
    assert_eq!(Priority::P2.to_string(), "P2");
    assert_eq!(Risk::Medium.to_string(), "Medium");
    assert_eq!(Risk::High.level(), "high");
    assert_eq!(Severity::MAX.to_string(), "5/5");
}

#[test]
fn recommended_actions_by_priority() {
    assert!(Priority::P1
        .recommended_action()
        .contains("Trust & Safety"));
    assert!(Priority::P2.recommended_action().contains("4 hours"));
    assert_eq!(
        Priority::P3.recommended_action(),
        Priority::P4.recommended_action()
    );
}
