// Lesson: Factory Method
// Each creator decides which phone it builds; the client only talks to the
// `Creator` trait.

use std::fmt;
use std::io::Write;

use super::{Lesson, LessonContext, LessonKind};
use crate::error::Result;
use crate::resolver::Resolver;

pub const DESCRIPTION: &str = "\
Factory Method (a.k.a. virtual constructor) defines an interface for creating \
an object but lets implementors decide which concrete type to instantiate. \
Client code works with the product interface only, and each new product needs \
its own creator.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    name: String,
}

impl Phone {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone{{Name: {}}}", self.name)
    }
}

pub trait Creator {
    fn factory_method(&self) -> Phone;
}

pub struct Nokia;
impl Creator for Nokia {
    fn factory_method(&self) -> Phone {
        Phone::new("Nokia")
    }
}

pub struct Samsung;
impl Creator for Samsung {
    fn factory_method(&self) -> Phone {
        Phone::new("Samsung")
    }
}

/// Table of creators by brand token, in display order.
pub fn creators() -> Result<Resolver<Box<dyn Creator>>> {
    Resolver::new("phone creator")
        .register("Nokia", || -> Box<dyn Creator> { Box::new(Nokia) })?
        .register("Samsung", || -> Box<dyn Creator> { Box::new(Samsung) })
}

pub fn run(ctx: &mut LessonContext<'_>) -> Result<()> {
    for (_, creator) in creators()?.resolve_all() {
        let phone = creator.factory_method();
        writeln!(ctx.out(), "{}", phone.info())?;
    }
    Ok(())
}

pub struct FactoryMethodLesson;

impl Lesson for FactoryMethodLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::FactoryMethod
    }

    fn title(&self) -> &'static str {
        "Factory Method"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn run(&self, ctx: &mut LessonContext<'_>) -> Result<()> {
        run(ctx)
    }
}
