use std::fmt::Write;
use stubsmith_core::{BatchReport, ClassOutcome, StubGenerationInfo};

/// Human-readable summary of an analyzed service class
pub fn format_analysis(info: &StubGenerationInfo) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "🔍 {}", info.qualified_class_name());
    let _ = writeln!(out, "   Test class: {}", info.test_class_name);
    let _ = writeln!(out, "   Instance:   {}", info.service_instance_name);

    let _ = writeln!(out, "\n📦 Mock dependencies ({}):", info.mock_dependencies.len());
    for dependency in &info.mock_dependencies {
        let mode = if dependency.relaxed { "relaxed" } else { "strict" };
        let _ = writeln!(
            out,
            "   • {}: {} ({mode})",
            dependency.name, dependency.declared_type
        );
    }

    let _ = writeln!(out, "\n🧪 Test methods ({}):", info.test_methods.len());
    for method in &info.test_methods {
        let parameters = method
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, p.type_name))
            .collect::<Vec<_>>()
            .join(", ");

        let mut flags = Vec::new();
        if method.is_transactional {
            flags.push("transactional");
        }
        if method.is_mutator {
            flags.push("mutator");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };

        let _ = writeln!(
            out,
            "   • {}({parameters}): {}{flags}",
            method.function_name, method.return_type
        );
    }

    out
}

pub fn print_batch_report(report: &BatchReport) {
    for class in &report.classes {
        match &class.outcome {
            ClassOutcome::Written { path } => {
                println!("✅ {} -> {}", class.class_name, path.display());
            }
            ClassOutcome::Composed { path, source } => {
                println!("// ==> {} ({})", path.display(), class.class_name);
                println!("{source}");
            }
            ClassOutcome::Failed { reason } => {
                println!("❌ {}: {reason}", class.class_name);
            }
        }
    }

    println!(
        "\n{} generated, {} failed",
        report.succeeded(),
        report.failed()
    );
}
