//! One-line assertions over JSON documents.
//!
//! Every predicate comes in two flavours. The plain variant first requires the
//! pointer to resolve, then applies the predicate. The `_if_present` variant
//! passes silently when the pointer does not resolve.
//!
//! The free functions panic on failure and are meant for `#[test]` bodies.
//! [`PointerAssertions`] routes outcomes to any [`Reporter`] instead.

use crate::engine::check;
use crate::engine::document::JsonDocument;
use crate::engine::report::{PanicReporter, Reporter};

/// Pointer assertions bound to a reporter.
#[derive(Debug, Clone, Default)]
pub struct PointerAssertions<R> {
    reporter: R,
}

impl<R: Reporter> PointerAssertions<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    #[track_caller]
    pub fn is_present<D: JsonDocument + ?Sized>(&mut self, doc: &D, pointer: &str) {
        self.reporter.report(check::check_is_present(doc, pointer));
    }

    #[track_caller]
    pub fn is_uuid<D: JsonDocument + ?Sized>(&mut self, doc: &D, pointer: &str) {
        self.reporter.report(check::check_is_uuid(doc, pointer));
    }

    #[track_caller]
    pub fn is_uuid_if_present<D: JsonDocument + ?Sized>(&mut self, doc: &D, pointer: &str) {
        self.reporter.report(check::check_is_uuid_if_present(doc, pointer));
    }

    #[track_caller]
    pub fn is_local_date_time<D: JsonDocument + ?Sized>(&mut self, doc: &D, pointer: &str) {
        self.reporter.report(check::check_is_local_date_time(doc, pointer));
    }

    #[track_caller]
    pub fn is_local_date_time_if_present<D: JsonDocument + ?Sized>(
        &mut self,
        doc: &D,
        pointer: &str,
    ) {
        self.reporter.report(check::check_is_local_date_time_if_present(doc, pointer));
    }

    #[track_caller]
    pub fn not_empty<D: JsonDocument + ?Sized>(&mut self, doc: &D, pointer: &str) {
        self.reporter.report(check::check_not_empty(doc, pointer));
    }

    #[track_caller]
    pub fn not_empty_if_present<D: JsonDocument + ?Sized>(&mut self, doc: &D, pointer: &str) {
        self.reporter.report(check::check_not_empty_if_present(doc, pointer));
    }

    #[track_caller]
    pub fn not_equals<D: JsonDocument + ?Sized>(&mut self, doc: &D, pointer: &str, expected: &str) {
        self.reporter.report(check::check_not_equals(doc, pointer, expected));
    }

    #[track_caller]
    pub fn not_equals_if_present<D: JsonDocument + ?Sized>(
        &mut self,
        doc: &D,
        pointer: &str,
        expected: &str,
    ) {
        self.reporter.report(check::check_not_equals_if_present(doc, pointer, expected));
    }

    #[track_caller]
    pub fn equals<D: JsonDocument + ?Sized>(&mut self, doc: &D, pointer: &str, expected: &str) {
        self.reporter.report(check::check_equals(doc, pointer, expected));
    }

    #[track_caller]
    pub fn equals_if_present<D: JsonDocument + ?Sized>(
        &mut self,
        doc: &D,
        pointer: &str,
        expected: &str,
    ) {
        self.reporter.report(check::check_equals_if_present(doc, pointer, expected));
    }
}

fn panicking() -> PointerAssertions<PanicReporter> {
    PointerAssertions::new(PanicReporter)
}

#[track_caller]
pub fn assert_is_present<D: JsonDocument + ?Sized>(doc: &D, pointer: &str) {
    panicking().is_present(doc, pointer);
}

#[track_caller]
pub fn assert_is_uuid<D: JsonDocument + ?Sized>(doc: &D, pointer: &str) {
    panicking().is_uuid(doc, pointer);
}

#[track_caller]
pub fn assert_is_uuid_if_present<D: JsonDocument + ?Sized>(doc: &D, pointer: &str) {
    panicking().is_uuid_if_present(doc, pointer);
}

#[track_caller]
pub fn assert_is_local_date_time<D: JsonDocument + ?Sized>(doc: &D, pointer: &str) {
    panicking().is_local_date_time(doc, pointer);
}

#[track_caller]
pub fn assert_is_local_date_time_if_present<D: JsonDocument + ?Sized>(doc: &D, pointer: &str) {
    panicking().is_local_date_time_if_present(doc, pointer);
}

/// Strings and arrays must be non-empty; other JSON types always pass.
#[track_caller]
pub fn assert_not_empty<D: JsonDocument + ?Sized>(doc: &D, pointer: &str) {
    panicking().not_empty(doc, pointer);
}

#[track_caller]
pub fn assert_not_empty_if_present<D: JsonDocument + ?Sized>(doc: &D, pointer: &str) {
    panicking().not_empty_if_present(doc, pointer);
}

#[track_caller]
pub fn assert_not_equals<D: JsonDocument + ?Sized>(doc: &D, pointer: &str, expected: &str) {
    panicking().not_equals(doc, pointer, expected);
}

#[track_caller]
pub fn assert_not_equals_if_present<D: JsonDocument + ?Sized>(
    doc: &D,
    pointer: &str,
    expected: &str,
) {
    panicking().not_equals_if_present(doc, pointer, expected);
}

#[track_caller]
pub fn assert_equals<D: JsonDocument + ?Sized>(doc: &D, pointer: &str, expected: &str) {
    panicking().equals(doc, pointer, expected);
}

#[track_caller]
pub fn assert_equals_if_present<D: JsonDocument + ?Sized>(doc: &D, pointer: &str, expected: &str) {
    panicking().equals_if_present(doc, pointer, expected);
}
