//! The install command: provision the font, then copy the themes.
use crate::config::Options;
use crate::error::InstallError;
use crate::logging::Logger;
use crate::tasks::{self, Context, Task};

/// Run the install command: provision the font, then install the themes.
///
/// # Errors
///
/// Returns the first error raised by any task; later tasks do not run.
pub fn run(options: &Options, log: &Logger) -> Result<(), InstallError> {
    let version = option_env!("HEXXA_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.debug(&format!("hexxa-install {version}"));

    let ctx = Context::new(options, log);
    let all_tasks = tasks::all_install_tasks();
    run_tasks(all_tasks.iter().map(AsRef::as_ref), &ctx)
}

/// Execute `tasks` in order, stopping at the first failure, then print the
/// run summary.
///
/// # Errors
///
/// Returns the error of the first task that fails.
pub fn run_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a dyn Task>,
    ctx: &Context,
) -> Result<(), InstallError> {
    for task in tasks {
        ctx.log.stage(task.name());
        let result = task
            .run(ctx)
            .inspect_err(|_| ctx.log.error(&format!("{} failed", task.name())))?;
        ctx.log.debug(&format!("{}: {result}", task.name()));
    }

    if ctx.dry_run() {
        ctx.log.info("Dry run complete; no files written");
    } else {
        ctx.log.info(&format!(
            "Themes installed to {}",
            ctx.options.destination.display()
        ));
    }
    Ok(())
}
