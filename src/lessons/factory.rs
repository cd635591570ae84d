// Lesson: Factory
// The caller hands a discriminator to a factory and gets back some
// implementation of `Chocolate`, never naming the concrete type.

use std::io::Write;
use std::str::FromStr;

use super::{Lesson, LessonContext, LessonKind};
use crate::error::{LessonError, Result};
use crate::resolver::{self, Discriminator};

pub const DESCRIPTION: &str = "\
A factory hides object instantiation behind one level of abstraction: what \
gets built depends on program state or on a parameter handed to the factory. \
The calling code only sees the product interface and never needs to know \
which implementation it received.";

// ============================================================================
// Products
// ============================================================================

pub trait Chocolate {
    fn name(&self) -> &'static str;
    fn price(&self) -> u32;

    fn price_line(&self) -> String {
        format!("Price: {}", self.price())
    }
}

#[derive(Debug, Default)]
pub struct DarkChocolate;

impl Chocolate for DarkChocolate {
    fn name(&self) -> &'static str {
        "DarkChocolate"
    }

    fn price(&self) -> u32 {
        10
    }
}

#[derive(Debug, Default)]
pub struct WhiteChocolate;

impl Chocolate for WhiteChocolate {
    fn name(&self) -> &'static str {
        "WhiteChocolate"
    }

    fn price(&self) -> u32 {
        15
    }
}

// ============================================================================
// Factory
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChocolateKind {
    Dark,
    White,
}

impl Discriminator for ChocolateKind {
    const FAMILY: &'static str = "chocolate";
    const ALL: &'static [Self] = &[ChocolateKind::Dark, ChocolateKind::White];

    fn token(self) -> &'static str {
        match self {
            ChocolateKind::Dark => "DarkChocolate",
            ChocolateKind::White => "WhiteChocolate",
        }
    }
}

impl FromStr for ChocolateKind {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        resolver::parse(s)
    }
}

/// A factory configured once with the kind it produces.
#[derive(Debug, Clone, Copy)]
pub struct ChocoFactory {
    kind: ChocolateKind,
}

impl ChocoFactory {
    pub fn new(kind: ChocolateKind) -> Self {
        Self { kind }
    }

    pub fn for_token(token: &str) -> Result<Self> {
        resolver::resolve_with(token, Self::new)
    }

    pub fn kind(&self) -> ChocolateKind {
        self.kind
    }

    pub fn create(&self) -> Box<dyn Chocolate> {
        match self.kind {
            ChocolateKind::Dark => Box::new(DarkChocolate),
            ChocolateKind::White => Box::new(WhiteChocolate),
        }
    }
}

/// One-shot resolution: token in, fresh chocolate out.
pub fn resolve(token: &str) -> Result<Box<dyn Chocolate>> {
    ChocoFactory::for_token(token).map(|factory| factory.create())
}

pub fn run(ctx: &mut LessonContext<'_>) -> Result<()> {
    let factory = ChocoFactory::for_token("DarkChocolate")?;
    writeln!(ctx.out(), "{}", factory.create().price_line())?;

    let white = resolve("WhiteChocolate")?;
    writeln!(ctx.out(), "{}", white.price_line())?;
    Ok(())
}

pub struct FactoryLesson;

impl Lesson for FactoryLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::Factory
    }

    fn title(&self) -> &'static str {
        "Factory"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn run(&self, ctx: &mut LessonContext<'_>) -> Result<()> {
        run(ctx)
    }
}
