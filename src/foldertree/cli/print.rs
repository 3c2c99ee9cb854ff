use colored::Colorize;
use foldertree::commands::{CmdMessage, MessageLevel};
use foldertree::source::ReplayStats;
use foldertree::store::AuditReport;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info | MessageLevel::Listing => println!("{}", message.content),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_audit(report: &AuditReport, stats: &ReplayStats) {
    let summary = format!(
        "{} commands, {} with errors",
        stats.executed, stats.failed
    );
    println!("{}", summary.dimmed());
    let text = report.to_string();
    if report.is_clean() {
        println!("{}", text.green());
    } else {
        print!("{}", text.yellow());
    }
}
