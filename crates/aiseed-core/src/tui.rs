//! Charm-style command flow using cliclack

use crate::runtime::python;
use crate::scaffold;
use anyhow::Result;

/// Run the `init` flow: scaffold the project, report the advisory runtime
/// check, and print the next steps.
pub async fn run_init(name: &str) -> Result<()> {
    cliclack::intro("aiseed")?;

    let spinner = cliclack::spinner();
    spinner.start(format!("Scaffolding '{}'...", name));

    let report = match scaffold::scaffold_project(name).await {
        Ok(report) => report,
        Err(e) => {
            spinner.stop("Nothing written");
            return Err(e.into());
        }
    };

    spinner.stop(format!(
        "Created {} files in {}",
        report.files.len(),
        report.root.display()
    ));

    report_python_runtime()?;
    print_next_steps(name)?;

    Ok(())
}

/// Advisory only: a missing interpreter warns but never fails the scaffold.
fn report_python_runtime() -> Result<()> {
    match python::find_python() {
        Ok(info) => {
            let label = info.version.unwrap_or(info.command);
            cliclack::log::success(format!("Detected runtime: {}", label))?;
        }
        Err(_) => {
            cliclack::log::warning(
                "No Python 3 found; the demo needs one (install from https://python.org)",
            )?;
        }
    }
    Ok(())
}

fn print_next_steps(name: &str) -> Result<()> {
    let steps = scaffold::next_steps(name);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy training!")?;

    Ok(())
}
