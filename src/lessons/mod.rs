//! The five pattern lessons and the catalog that resolves them by name.
//!
//! Every lesson exposes a free `run(&mut LessonContext)` function and a unit
//! struct implementing [`Lesson`]. Output goes to the context's writer so the
//! same code prints to stdout from the binary and to a buffer in tests.

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod factory_method;
pub mod observer;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{LessonError, Result};
use crate::resolver::{self, Discriminator};

/// Where a lesson writes, plus the randomness it may draw from.
pub struct LessonContext<'a> {
    out: &'a mut dyn Write,
    rng: StdRng,
}

impl<'a> LessonContext<'a> {
    /// A fixed `seed` makes random picks reproducible.
    pub fn new(out: &'a mut dyn Write, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { out, rng }
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

pub trait Lesson {
    fn kind(&self) -> LessonKind;
    fn title(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn run(&self, ctx: &mut LessonContext<'_>) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessonKind {
    AbstractFactory,
    Builder,
    Factory,
    FactoryMethod,
    Observer,
}

impl Discriminator for LessonKind {
    const FAMILY: &'static str = "lesson";
    const ALL: &'static [Self] = &[
        LessonKind::AbstractFactory,
        LessonKind::Builder,
        LessonKind::Factory,
        LessonKind::FactoryMethod,
        LessonKind::Observer,
    ];

    fn token(self) -> &'static str {
        match self {
            LessonKind::AbstractFactory => "abstract_factory",
            LessonKind::Builder => "builder",
            LessonKind::Factory => "factory",
            LessonKind::FactoryMethod => "factory_method",
            LessonKind::Observer => "observer",
        }
    }
}

impl FromStr for LessonKind {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        resolver::parse(s)
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl LessonKind {
    pub fn lesson(self) -> Box<dyn Lesson> {
        match self {
            LessonKind::AbstractFactory => Box::new(abstract_factory::AbstractFactoryLesson),
            LessonKind::Builder => Box::new(builder::BuilderLesson),
            LessonKind::Factory => Box::new(factory::FactoryLesson),
            LessonKind::FactoryMethod => Box::new(factory_method::FactoryMethodLesson),
            LessonKind::Observer => Box::new(observer::ObserverLesson),
        }
    }
}

/// Looks a lesson up by its token, e.g. `"factory_method"`.
pub fn lesson(name: &str) -> Result<Box<dyn Lesson>> {
    resolver::resolve_with(name, LessonKind::lesson)
}

/// Every lesson, in catalog order.
pub fn all() -> Vec<Box<dyn Lesson>> {
    LessonKind::ALL.iter().map(|kind| kind.lesson()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_resolves_every_token() {
        for token in resolver::tokens::<LessonKind>() {
            let lesson = lesson(token).ok().unwrap();
            assert_eq!(lesson.kind().token(), token);
            assert!(!lesson.title().is_empty());
            assert!(!lesson.description().is_empty());
        }
    }

    #[test]
    fn test_catalog_order() {
        let titles: Vec<_> = all().iter().map(|l| l.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Abstract Factory",
                "Builder",
                "Factory",
                "Factory Method",
                "Observer"
            ]
        );
    }

    #[test]
    fn test_unknown_lesson() {
        let err = lesson("singleton").err().unwrap();
        assert!(matches!(err, LessonError::UnknownVariant { family: "lesson", .. }));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let kind: LessonKind = LessonKind::FactoryMethod.to_string().parse().unwrap();
        assert_eq!(kind, LessonKind::FactoryMethod);
    }

    #[test]
    fn test_seeded_contexts_agree() {
        use rand::Rng;

        let mut a: Vec<u8> = Vec::new();
        let mut b: Vec<u8> = Vec::new();
        let mut ctx_a = LessonContext::new(&mut a, Some(7));
        let mut ctx_b = LessonContext::new(&mut b, Some(7));
        assert_eq!(ctx_a.rng().gen::<u64>(), ctx_b.rng().gen::<u64>());
    }
}
