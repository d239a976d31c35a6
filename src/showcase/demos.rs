//! The demonstration bodies.
//!
//! All integer demonstrations work over the same fixed pair of inputs. Each
//! body builds one or more callable values, invokes them, and emits what the
//! corresponding operation produced.

use crate::functional::combiner::{Combine2, Combine3};
use crate::functional::consumer::Consume;
use crate::functional::deferred::DeferredSum;
use crate::functional::named;
use crate::functional::predicate::Predicate;
use crate::functional::supplier::Supply;
use crate::functional::task::Task;
use crate::showcase::transcript::Transcript;

const X1: i64 = 1;
const X2: i64 = 2;

/// Binary combiner built from an inline closure.
pub fn closure_add(out: &mut Transcript) {
    let add = |a: i64, b: i64| a + b;
    out.emit(add.apply(X1, X2));
}

/// Binary combiner built from a pointer to the named operation.
pub fn named_add(out: &mut Transcript) {
    let add: fn(i64, i64) -> i64 = named::sum;
    out.emit(add.apply(X1, X2));
}

/// The named operation called directly, no callable value in between.
pub fn direct_call(out: &mut Transcript) {
    out.emit(named::sum(X1, X2));
}

/// Zero-argument task capturing both inputs; emitting is its side effect.
pub fn deferred_task(out: &mut Transcript) {
    let mut task = || out.emit(named::sum(X1, X2));
    task.run();
}

/// The holder computes only when told to; the accessor reads afterwards.
pub fn holder(out: &mut Transcript) {
    let mut holder = DeferredSum::new(X1, X2);
    holder.run();
    out.emit(holder.result());
}

/// Ternary combiner built two ways: a closure folding all three arguments,
/// and a pointer to the named operation that ignores its third.
pub fn three_way_add(out: &mut Transcript) {
    let add_all = |a: i64, b: i64, c: i64| named::sum(named::sum(a, b), c);
    let add_first_two: fn(i64, i64, i64) -> i64 = named::sum_first_two;
    out.emit(add_all.apply(X1, X2, 0));
    out.emit(add_first_two.apply(X1, X2, 0));
}

/// Blankness predicate over a single-space string.
pub fn blank_predicate(out: &mut Transcript) {
    let blank: fn(&str) -> bool = named::is_blank;
    out.emit(blank.test(" "));
}

/// Consumer whose side effect is emitting its argument.
pub fn print_consumer(out: &mut Transcript) {
    let mut consumer = |text: &str| out.emit(text);
    consumer.accept("demo");
}

/// Supplier of a constant string.
pub fn constant_supplier(out: &mut Transcript) {
    let supplier = || String::from("demo");
    out.emit(supplier.get());
}
