use std::io::Write;

use colored::Colorize;
use tracing::{error, info};

use crate::config::CourseConfig;
use crate::error::{LessonError, Result};
use crate::lessons::{self, Lesson, LessonContext, LessonKind};
use crate::resolver;

/// Outcome of one runner invocation.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub completed: Vec<LessonKind>,
    pub failed: Vec<(String, LessonError)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Names given on the command line win, then the configured list, then the
/// whole catalog.
fn selection(names: &[String], config: &CourseConfig) -> Vec<String> {
    if !names.is_empty() {
        names.to_vec()
    } else if !config.lessons.is_empty() {
        config.lessons.clone()
    } else {
        resolver::tokens::<LessonKind>().map(String::from).collect()
    }
}

fn header(title: &str, color: bool) -> String {
    let line = format!("=== {title} ===");
    if color {
        line.as_str().bold().cyan().to_string()
    } else {
        line
    }
}

fn failure(err: &LessonError, color: bool) -> String {
    let line = format!("Error: {err}");
    if color {
        line.as_str().red().to_string()
    } else {
        line
    }
}

fn run_one(lesson: &dyn Lesson, ctx: &mut LessonContext<'_>, color: bool) -> Result<()> {
    info!(lesson = %lesson.kind(), "running lesson");
    writeln!(ctx.out(), "{}", header(lesson.title(), color))?;
    writeln!(ctx.out(), "{}\n", lesson.description())?;
    lesson.run(ctx)
}

/// Runs the selected lessons in order. A failing lesson is reported and the
/// rest still run; only output errors abort the whole run.
pub fn run_lessons(
    names: &[String],
    config: &CourseConfig,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    let mut ctx = LessonContext::new(out, config.seed);
    let mut summary = RunSummary::default();

    for name in selection(names, config) {
        let outcome = lessons::lesson(&name).and_then(|lesson| {
            run_one(&*lesson, &mut ctx, config.color).map(|()| lesson.kind())
        });

        match outcome {
            Ok(kind) => summary.completed.push(kind),
            Err(LessonError::Io(err)) => return Err(LessonError::Io(err)),
            Err(err) => {
                error!(lesson = %name, "{err}");
                writeln!(ctx.out(), "{}", failure(&err, config.color))?;
                summary.failed.push((name, err));
            }
        }
        writeln!(ctx.out())?;
    }

    Ok(summary)
}
