use clap::Args;
use complaint_intel::batch::{score_path, write_results, BatchRow, BatchSummary};
use complaint_intel::config::AppConfig;
use complaint_intel::error::AppError;
use complaint_intel::intake::{ComplaintTicket, IntakeService, ManualOverride, SampleComplaint};
use complaint_intel::scoring::{
    score_complaint, Channel, ComplaintCategory, ComplaintInput, CustomerTier, Priority,
    ScoringResult,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Free-text complaint description
    pub(crate) text: String,
    /// Complaint category (Defect, Billing, Delivery, Service, Other)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Intake channel (Voice, Chat, Email, Social)
    #[arg(long)]
    pub(crate) channel: Option<String>,
    /// Customer tier (VIP, Premium, Standard)
    #[arg(long)]
    pub(crate) tier: Option<String>,
    /// Order value in dollars
    #[arg(long, default_value_t = 0.0)]
    pub(crate) order_value: f64,
    /// Mark the complaint as a repeat issue
    #[arg(long)]
    pub(crate) repeat: bool,
    /// Print the full assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with Text, Category, Channel, Customer Tier, Order Value and Repeat columns
    pub(crate) input: PathBuf,
    /// Write scored rows to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Apply an agent override bumping the delivery sample to P2.
    #[arg(long)]
    pub(crate) with_override: bool,
}

impl ScoreArgs {
    fn to_input(&self) -> ComplaintInput {
        ComplaintInput {
            text: self.text.clone(),
            category: self
                .category
                .as_deref()
                .map(ComplaintCategory::from)
                .unwrap_or_default(),
            channel: self.channel.as_deref().map(Channel::from).unwrap_or_default(),
            customer_tier: self
                .tier
                .as_deref()
                .map(CustomerTier::from)
                .unwrap_or_default(),
            order_value: self.order_value,
            is_repeat: self.repeat,
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let result = score_complaint(&args.to_input());

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Assessment unavailable: {}", err),
        }
        return Ok(());
    }

    render_assessment(&result);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let rows = score_path(&args.input)?;

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            write_results(BufWriter::new(file), &rows)?;
            println!("Wrote {} scored complaints to {}", rows.len(), path.display());
            render_batch_summary(&rows);
        }
        None => {
            write_results(io::stdout().lock(), &rows)?;
            io::stdout().flush()?;
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = IntakeService::new(config.intake);

    println!("=== Complaint Intelligence Demo ===");
    for sample in SampleComplaint::ALL {
        let manual_override = (args.with_override && sample == SampleComplaint::Delivery).then(|| {
            ManualOverride {
                priority: Some(Priority::P2),
                ..ManualOverride::default()
            }
        });

        let form = service.sample(sample.name())?;
        let ticket = service.triage(form, manual_override)?;
        render_ticket(sample, &ticket);
    }

    Ok(())
}

fn render_ticket(sample: SampleComplaint, ticket: &ComplaintTicket) {
    println!();
    println!("-- Sample: {} --", sample);
    println!("  {}", ticket.summary());
    println!(
        "  Logged {} via {} ({})",
        ticket.timestamp.format("%Y-%m-%d %H:%M UTC"),
        ticket.channel,
        ticket.status.label()
    );
    if ticket.overridden {
        println!("  Assessment adjusted by agent override");
    }
    render_assessment(&ticket.assessment);
}

fn render_assessment(result: &ScoringResult) {
    println!(
        "  Score {}/100 | Severity {} | Priority {} | Risk {}",
        result.total_score, result.severity, result.priority, result.risk
    );
    println!("  Breakdown:");
    for group in result.breakdown.groups() {
        println!("    - {}: +{}", group.label, group.points);
    }
    if result.reasons.is_empty() {
        println!("  Reasons: none");
    } else {
        println!("  Reasons:");
        for reason in &result.reasons {
            println!("    - {}", reason);
        }
    }
    println!("  Recommended action: {}", result.priority.recommended_action());
}

fn render_batch_summary(rows: &[BatchRow]) {
    let summary = BatchSummary::from_rows(rows);
    println!(
        "  Risk: {} high, {} medium, {} low",
        summary.high_risk, summary.medium_risk, summary.low_risk
    );
    let [p1, p2, p3, p4] = summary.by_priority;
    println!("  Priority: P1={} P2={} P3={} P4={}", p1, p2, p3, p4);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_args_fall_back_to_intake_defaults() {
        let args = ScoreArgs {
            text: "Package is late".to_string(),
            category: None,
            channel: None,
            tier: None,
            order_value: 0.0,
            repeat: false,
            json: false,
        };

        let input = args.to_input();

        assert_eq!(input.category, ComplaintCategory::Other);
        assert_eq!(input.channel, Channel::Email);
        assert_eq!(input.customer_tier, CustomerTier::Standard);
        assert_eq!(score_complaint(&input).total_score, 20);
    }

    #[test]
    fn batch_command_writes_scored_file() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("complaint-intel-api-{}-in.csv", std::process::id()));
        let output = dir.join(format!("complaint-intel-api-{}-out.csv", std::process::id()));
        std::fs::write(
            &input,
            "Id,Text,Category\nC-9,I will sue over this fraud,Billing\n",
        )
        .expect("input written");

        run_batch(BatchArgs {
            input: input.clone(),
            output: Some(output.clone()),
        })
        .expect("batch command succeeds");

        let written = std::fs::read_to_string(&output).expect("output readable");
        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();

        let mut lines = written.lines();
        assert_eq!(
            lines.next(),
            Some("id,total_score,severity,priority,risk,reasons")
        );
        let row = lines.next().expect("scored row");
        assert!(row.starts_with("C-9,85,4,P2,High,"), "row was {row}");
    }

    #[test]
    fn batch_command_reports_missing_input() {
        let input = std::env::temp_dir().join(format!(
            "complaint-intel-api-{}-absent.csv",
            std::process::id()
        ));

        let err = run_batch(BatchArgs {
            input,
            output: None,
        })
        .expect_err("missing input rejected");

        assert!(matches!(err, AppError::Batch(_)));
    }

    #[test]
    fn score_args_map_named_values() {
        let args = ScoreArgs {
            text: String::new(),
            category: Some("Billing".to_string()),
            channel: Some("Voice".to_string()),
            tier: Some("VIP".to_string()),
            order_value: 750.0,
            repeat: true,
            json: true,
        };

        let result = score_complaint(&args.to_input());

        assert_eq!(result.total_score, 25 + 25 + 15 + 20 + 5);
        assert_eq!(result.priority, Priority::P1);
    }
}
