use crate::config::{Applicability, ConfigRecord, RuleParam, RuleSpec, Severity};
use serde_json::json;
use std::path::Path;

/// Print the record with ANSI colors: extends first, then one line per rule.
pub fn print_pretty(source: &Path, record: &ConfigRecord) {
    println!("\x1b[4m{}\x1b[0m", source.display());

    if record.extends.is_empty() {
        println!("\n  extends: \x1b[90m(none)\x1b[0m");
    } else {
        println!("\n  extends:");
        for base in &record.extends {
            println!("    \x1b[36m{}\x1b[0m", base);
        }
    }

    if record.rules.is_empty() {
        println!("\n  rules: \x1b[90m(none)\x1b[0m");
    } else {
        println!("\n  rules:");
        for (id, spec) in &record.rules {
            println!(
                "    {:<20} {} {}",
                id,
                severity_label(spec.severity),
                render_detail(spec)
            );
        }
    }

    let active = record.rules.values().filter(|s| !s.is_off()).count();
    let disabled = record.rules.len() - active;
    println!(
        "\n\x1b[1m{} rule{} ({} active, {} disabled), {} base config{}\x1b[0m",
        record.rules.len(),
        if record.rules.len() == 1 { "" } else { "s" },
        active,
        disabled,
        record.extends.len(),
        if record.extends.len() == 1 { "" } else { "s" },
    );
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Off => "\x1b[90moff  \x1b[0m",
        Severity::Warn => "\x1b[33mwarn \x1b[0m",
        Severity::Error => "\x1b[31merror\x1b[0m",
    }
}

fn render_detail(spec: &RuleSpec) -> String {
    let mut parts = Vec::new();
    match spec.applicability {
        Some(Applicability::Always) => parts.push("always".to_string()),
        Some(Applicability::Never) => parts.push("never".to_string()),
        None => {}
    }
    match &spec.param {
        Some(RuleParam::Allowed(values)) => parts.push(format!("[{}]", values.join(", "))),
        Some(RuleParam::Bound(bound)) => parts.push(bound.to_string()),
        None => {}
    }
    format!("\x1b[90m{}\x1b[0m", parts.join(" "))
}

/// Print the record as structured JSON, wrapped with its source path.
pub fn print_json(source: &Path, record: &ConfigRecord) {
    let output = json!({
        "source": source.display().to_string(),
        "config": record,
        "summary": {
            "extends": record.extends.len(),
            "rules": record.rules.len(),
            "active": record.rules.values().filter(|s| !s.is_off()).count(),
        },
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_for_allowed_set() {
        let spec = RuleSpec::with_allowed(Severity::Error, Applicability::Always, ["feat", "fix"]);
        assert_eq!(render_detail(&spec), "\x1b[90malways [feat, fix]\x1b[0m");
    }

    #[test]
    fn detail_for_bound() {
        let spec = RuleSpec::with_bound(Severity::Error, Applicability::Always, 100);
        assert_eq!(render_detail(&spec), "\x1b[90malways 100\x1b[0m");
    }

    #[test]
    fn detail_for_off_is_empty() {
        assert_eq!(render_detail(&RuleSpec::off()), "\x1b[90m\x1b[0m");
    }
}
