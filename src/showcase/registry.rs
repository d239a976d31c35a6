use serde::Serialize;

use crate::showcase::{demo::Demo, demos};

/// Every demonstration, in execution order.
pub static DEMOS: &[Demo] = &[
    Demo {
        name: "closure-add",
        summary: "binary combiner from an inline closure",
        run: demos::closure_add,
    },
    Demo {
        name: "named-add",
        summary: "binary combiner from a pointer to the named sum",
        run: demos::named_add,
    },
    Demo {
        name: "direct-call",
        summary: "the named sum called with no callable value in between",
        run: demos::direct_call,
    },
    Demo {
        name: "deferred-task",
        summary: "zero-argument task capturing both inputs",
        run: demos::deferred_task,
    },
    Demo {
        name: "holder",
        summary: "explicit compute step on a stateful holder",
        run: demos::holder,
    },
    Demo {
        name: "three-way-add",
        summary: "ternary combiner as a closure and as a named pointer",
        run: demos::three_way_add,
    },
    Demo {
        name: "blank-predicate",
        summary: "text predicate over a whitespace-only string",
        run: demos::blank_predicate,
    },
    Demo {
        name: "print-consumer",
        summary: "consumer whose side effect is printing",
        run: demos::print_consumer,
    },
    Demo {
        name: "constant-supplier",
        summary: "supplier returning a constant string",
        run: demos::constant_supplier,
    },
];

pub fn get_demo(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}

/// Serializable projection of the registry for the `list` surface.
#[derive(Debug, Clone, Serialize)]
pub struct DemoInfo {
    pub name: &'static str,
    pub summary: &'static str,
}

pub fn catalog() -> Vec<DemoInfo> {
    DEMOS
        .iter()
        .map(|demo| DemoInfo {
            name: demo.name,
            summary: demo.summary,
        })
        .collect()
}
