use colored::*;
use dqp_engine::RunReport;

pub fn print_run_report(report: &RunReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &RunReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  DATA QUALITY REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.violations.is_empty() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "No data quality issues found".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "!".yellow().bold(),
            format!(
                "{} issue(s) across {} id(s)",
                report.violations.len(),
                report.affected_ids
            )
            .yellow()
            .bold()
        );

        println!("\n{}", "Issues by rule:".bold());
        for entry in report.summary.entries() {
            println!(
                "  {:<30} [{}] {}",
                entry.rule_name,
                entry.severity.to_string().yellow(),
                entry.count
            );
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Source:          {}", report.source);
    println!("  Rows extracted:  {}", report.rows_extracted);
    println!("  Lines skipped:   {}", report.skipped_lines);
    println!("  Rows clean:      {}", report.rows_clean);
    if report.rows_loaded > 0 {
        println!(
            "  Rows loaded:     {} (table '{}')",
            report.rows_loaded, report.table
        );
    }
    println!("  Duration:        {}ms", report.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &RunReport) {
    println!(
        "{}",
        serde_json::to_string_pretty(report).expect("report serializes")
    );
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
