use crate::infra::{InMemoryAnalyticsPublisher, InMemoryDiagnosisRepository};
use clap::Args;
use mind_os::config::IntakeConfig;
use mind_os::diagnosis::{
    compute_diagnosis, Answer, AnswerSheet, DiagnosisResult, DiagnosisService,
    DiagnosisSubmission, WizardExportImporter, QUESTION_COUNT,
};
use mind_os::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// Path to a wizard CSV export (`Question ID,Answer` rows)
    pub(crate) export: PathBuf,
    /// Emit the raw result as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Reject the synthetic sheet unless all questions are answered
    #[arg(long)]
    pub(crate) require_complete: bool,
}

/// Score a wizard export offline, without persistence or analytics.
pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let sheet = WizardExportImporter::from_path(&args.export)?;
    let result = compute_diagnosis(&sheet);

    if args.json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "Scored {} of {} answers from {}",
        sheet.answered(),
        QUESTION_COUNT,
        args.export.display()
    );
    render_result(&result);
    Ok(())
}

/// Walk a synthetic sheet through the full service: submit, retrieve, and
/// show what the analytics collaborator recorded.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryDiagnosisRepository::default());
    let analytics = Arc::new(InMemoryAnalyticsPublisher::default());
    let service = DiagnosisService::new(
        repository,
        analytics.clone(),
        IntakeConfig {
            require_complete_sheet: args.require_complete,
        },
    );

    let record = service.submit(DiagnosisSubmission {
        answers: demo_sheet(),
        client_submitted_at: Some(chrono::Utc::now()),
    })?;

    println!("Submitted diagnosis {}", record.diagnosis_id.0);
    render_result(&record.result);

    let fetched = service.get(&record.diagnosis_id)?;
    println!(
        "\nRetrieved {} again: code {} (unchanged)",
        fetched.diagnosis_id.0, fetched.result.os.code
    );

    for event in analytics.events() {
        println!(
            "Analytics logged {} ({} answers, client timestamp {})",
            event.diagnosis_id.0,
            event.answered,
            event
                .client_submitted_at
                .map(|at| at.to_rfc3339())
                .unwrap_or_else(|| "absent".to_string()),
        );
    }

    Ok(())
}

fn render_result(result: &DiagnosisResult) {
    println!(
        "  Code:      {} ({:?} subtype)",
        result.os.code, result.os.subtype
    );
    println!(
        "  Engines:   {} / {}",
        result.engine.primary.label(),
        result.engine.secondary.label()
    );
    println!(
        "  Biases:    total {} with {} alert(s)",
        result.bias.total_score,
        result.bias.alerts.len()
    );
    for alert in &result.bias.alerts {
        println!("             alert: {}", alert.label());
    }
    println!(
        "  Matrix:    x {:.1}, y {:.1}",
        result.matrix.x, result.matrix.y
    );
    println!("  Validity:  {:?}", result.validity);
}

/// Alternating sheet so the demo exercises every scoring pass with a sheet
/// that is neither all-A nor all-B.
fn demo_sheet() -> AnswerSheet {
    (1..=QUESTION_COUNT)
        .map(|id| (id, if id % 2 == 0 { Answer::B } else { Answer::A }))
        .collect()
}
