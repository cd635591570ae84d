// Lesson: Builder
// One builder, two outputs: a plain mutable `Order` or a copy-on-write
// `SharedOrder` value.

use std::fmt;
use std::io::Write;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use super::{Lesson, LessonContext, LessonKind};
use crate::error::Result;

pub const DESCRIPTION: &str = "\
Builder separates constructing a composite object from its representation, so \
the same construction steps can yield different results. It replaces \
constructors with long parameter lists by named, chainable steps, and lets the \
finished object be immutable even though it was assembled piece by piece.";

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    name: String,
    date: DateTime<Utc>,
}

impl Order {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = date;
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order{{name='{}', date={}}}",
            self.name,
            self.date.to_rfc3339()
        )
    }
}

/// Immutable order handle. Clones share storage until one of them is changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedOrder(Rc<Order>);

impl SharedOrder {
    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.0.date()
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        Rc::make_mut(&mut next.0).set_name(name);
        next
    }

    pub fn with_date(&self, date: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        Rc::make_mut(&mut next.0).set_date(date);
        next
    }

    pub fn shares_storage_with(&self, other: &SharedOrder) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Copies the order out, leaving other handles untouched.
    pub fn to_order(&self) -> Order {
        (*self.0).clone()
    }
}

impl fmt::Display for SharedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

// ============================================================================
// Builder
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct OrderBuilder {
    name: Option<String>,
    date: Option<DateTime<Utc>>,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn build(self) -> Order {
        Order {
            name: self.name.unwrap_or_default(),
            date: self.date.unwrap_or_else(Utc::now),
        }
    }

    pub fn build_shared(self) -> SharedOrder {
        SharedOrder(Rc::new(self.build()))
    }
}

pub fn run(ctx: &mut LessonContext<'_>) -> Result<()> {
    let mut order = OrderBuilder::new().name("Order 1").date(Utc::now()).build();
    writeln!(ctx.out(), "{order}")?;
    order.set_name("Order 1 (edited)");
    writeln!(ctx.out(), "{order}")?;

    let shared = OrderBuilder::new().name("Order 2").date(Utc::now()).build_shared();
    let renamed = shared.with_name("Order 3");
    writeln!(ctx.out(), "{shared}")?;
    writeln!(ctx.out(), "{renamed}")?;
    Ok(())
}

pub struct BuilderLesson;

impl Lesson for BuilderLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::Builder
    }

    fn title(&self) -> &'static str {
        "Builder"
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
    use chrono::TimeZone;

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_builder_sets_fields() {
        let order = OrderBuilder::new().name("Order 1").date(new_year()).build();
        assert_eq!(order.name(), "Order 1");
        assert_eq!(order.date(), new_year());
    }

    #[test]
    fn test_builder_defaults() {
        let before = Utc::now();
        let order = OrderBuilder::new().build();
        assert_eq!(order.name(), "");
        assert!(order.date() >= before);
    }

    #[test]
    fn test_display_format() {
        let order = OrderBuilder::new().name("Order 1").date(new_year()).build();
        assert_eq!(
            order.to_string(),
            "Order{name='Order 1', date=2024-01-01T00:00:00+00:00}"
        );
        let shared = OrderBuilder::new().name("Order 1").date(new_year()).build_shared();
        assert_eq!(shared.to_string(), order.to_string());
    }

    #[test]
    fn test_mutable_order_setters() {
        let mut order = OrderBuilder::new().name("a").date(new_year()).build();
        order.set_name("b");
        assert_eq!(order.name(), "b");
    }

    #[test]
    fn test_shared_order_is_copy_on_write() {
        let original = OrderBuilder::new().name("Order 2").date(new_year()).build_shared();
        let alias = original.clone();
        assert!(alias.shares_storage_with(&original));

        let renamed = original.with_name("Order 3");
        assert_eq!(original.name(), "Order 2");
        assert_eq!(renamed.name(), "Order 3");
        assert!(!renamed.shares_storage_with(&original));
        assert_eq!(renamed.date(), original.date());
    }

    #[test]
    fn test_to_order_detaches() {
        let shared = OrderBuilder::new().name("x").date(new_year()).build_shared();
        let mut owned = shared.to_order();
        owned.set_name("y");
        assert_eq!(shared.name(), "x");
    }

    #[test]
    fn test_run_prints_four_orders() {
        let mut buf: Vec<u8> = Vec::new();
        run(&mut LessonContext::new(&mut buf, None)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Order{name='Order 1', date="));
        assert!(lines[1].starts_with("Order{name='Order 1 (edited)'"));
        assert!(lines[2].starts_with("Order{name='Order 2'"));
        assert!(lines[3].starts_with("Order{name='Order 3'"));
    }
}
