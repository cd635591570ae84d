// Lesson: Abstract Factory
// A factory of factories: the client picks a whole product family by token and
// then builds every product through the family's common interface.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use rand::seq::SliceRandom;
use tracing::info;

use super::{Lesson, LessonContext, LessonKind};
use crate::error::{LessonError, Result};
use crate::resolver::{self, Discriminator};

pub const DESCRIPTION: &str = "\
Abstract Factory provides an interface for creating families of related \
objects without naming their concrete types. The client asks for a family \
(here: an operating-system look) and receives a factory; every product it then \
builds (button, logo) belongs to that family. Adding a new family is cheap, \
adding a new kind of product means touching every factory.";

/// Tokens the demo draws from. "error" is deliberately outside the family.
pub const APPEARANCES: [&str; 3] = ["Linux", "OSX", "error"];

// ============================================================================
// Products
// ============================================================================

pub trait Button {
    fn paint(&self) -> &'static str;
}

pub trait Logo {
    fn print(&self) -> &'static str;
}

pub struct LinuxButton;
impl Button for LinuxButton {
    fn paint(&self) -> &'static str {
        "LinuxButton"
    }
}

pub struct OsxButton;
impl Button for OsxButton {
    fn paint(&self) -> &'static str {
        "OSXButton"
    }
}

pub struct LinuxLogo;
impl Logo for LinuxLogo {
    fn print(&self) -> &'static str {
        "LinuxLogo"
    }
}

pub struct OsxLogo;
impl Logo for OsxLogo {
    fn print(&self) -> &'static str {
        "OSXLogo"
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_logo(&self) -> Box<dyn Logo>;
}

pub struct LinuxFactory;
impl GuiFactory for LinuxFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LinuxButton)
    }
    fn create_logo(&self) -> Box<dyn Logo> {
        Box::new(LinuxLogo)
    }
}

pub struct OsxFactory;
impl GuiFactory for OsxFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(OsxButton)
    }
    fn create_logo(&self) -> Box<dyn Logo> {
        Box::new(OsxLogo)
    }
}

// ============================================================================
// Discriminator
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
    Linux,
    Osx,
}

impl Discriminator for OperatingSystem {
    const FAMILY: &'static str = "operating system";
    const ALL: &'static [Self] = &[OperatingSystem::Linux, OperatingSystem::Osx];

    fn token(self) -> &'static str {
        match self {
            OperatingSystem::Linux => "Linux",
            OperatingSystem::Osx => "OSX",
        }
    }
}

impl FromStr for OperatingSystem {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        resolver::parse(s)
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl OperatingSystem {
    pub fn factory(self) -> Box<dyn GuiFactory> {
        match self {
            OperatingSystem::Linux => Box::new(LinuxFactory),
            OperatingSystem::Osx => Box::new(OsxFactory),
        }
    }
}

/// Resolves an appearance token to its product family.
pub fn create_factory(appearance: &str) -> Result<Box<dyn GuiFactory>> {
    resolver::resolve_with(appearance, OperatingSystem::factory)
}

/// Paints and prints both products of a family, returning the labels in order.
pub fn render(factory: &dyn GuiFactory) -> [&'static str; 2] {
    [factory.create_button().paint(), factory.create_logo().print()]
}

/// Runs the demo for one fixed appearance.
pub fn run_with(appearance: &str, ctx: &mut LessonContext<'_>) -> Result<()> {
    writeln!(ctx.out(), "Current OS: {appearance}")?;
    let factory = create_factory(appearance)?;
    for label in render(&*factory) {
        writeln!(ctx.out(), "{label}")?;
    }
    Ok(())
}

/// Picks a random appearance (possibly an unknown one) and runs the demo.
pub fn run(ctx: &mut LessonContext<'_>) -> Result<()> {
    let appearance = APPEARANCES
        .choose(ctx.rng())
        .copied()
        .unwrap_or(APPEARANCES[0]);
    info!(appearance, "abstract factory picked appearance");
    run_with(appearance, ctx)
}

pub struct AbstractFactoryLesson;

impl Lesson for AbstractFactoryLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::AbstractFactory
    }

    fn title(&self) -> &'static str {
        "Abstract Factory"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn run(&self, ctx: &mut LessonContext<'_>) -> Result<()> {
        run(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(appearance: &str) -> (Result<()>, String) {
        let mut buf: Vec<u8> = Vec::new();
        let result = {
            let mut ctx = LessonContext::new(&mut buf, Some(1));
            run_with(appearance, &mut ctx)
        };
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_linux_family() {
        let factory = create_factory("Linux").unwrap();
        assert_eq!(render(&*factory), ["LinuxButton", "LinuxLogo"]);
    }

    #[test]
    fn test_osx_family() {
        let factory = create_factory("OSX").unwrap();
        assert_eq!(render(&*factory), ["OSXButton", "OSXLogo"]);
    }

    #[test]
    fn test_error_token_is_unknown() {
        let err = create_factory("error").err().unwrap();
        assert!(matches!(err, LessonError::UnknownVariant { .. }));
        assert_eq!(err.discriminator(), Some("error"));
    }

    #[test]
    fn test_from_str_and_display() {
        let os: OperatingSystem = "OSX".parse().unwrap();
        assert_eq!(os, OperatingSystem::Osx);
        assert_eq!(os.to_string(), "OSX");
        assert!("osx".parse::<OperatingSystem>().is_err());
    }

    #[test]
    fn test_run_with_prints_family() {
        let (result, out) = output_of("Linux");
        assert!(result.is_ok());
        assert_eq!(out, "Current OS: Linux\nLinuxButton\nLinuxLogo\n");
    }

    #[test]
    fn test_run_with_unknown_prints_header_then_fails() {
        let (result, out) = output_of("error");
        assert!(matches!(result, Err(LessonError::UnknownVariant { .. })));
        assert_eq!(out, "Current OS: error\n");
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let run_seeded = || {
            let mut buf: Vec<u8> = Vec::new();
            let ok = {
                let mut ctx = LessonContext::new(&mut buf, Some(42));
                run(&mut ctx).is_ok()
            };
            (ok, String::from_utf8(buf).unwrap())
        };
        assert_eq!(run_seeded(), run_seeded());
    }
}
