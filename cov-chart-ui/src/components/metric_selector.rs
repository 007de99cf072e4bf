//! Metric picker. Two of these sit side by side; each shows the other's
//! current value as disabled.

use crate::state::AppState;
use dioxus::prelude::*;

/// Which of the two metric pickers a selector drives.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MetricSlot {
    Primary,
    Secondary,
}

impl MetricSlot {
    fn dom_id(self) -> &'static str {
        match self {
            MetricSlot::Primary => "metric1-select",
            MetricSlot::Secondary => "metric2-select",
        }
    }

    fn label(self) -> &'static str {
        match self {
            MetricSlot::Primary => "Metric1: ",
            MetricSlot::Secondary => "Metric2: ",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MetricSelectorProps {
    pub slot: MetricSlot,
}

/// Metric dropdown. Options are recomputed from the counterpart picker on
/// every render, so a change in one picker re-flags the other.
#[component]
pub fn MetricSelector(props: MetricSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let slot = props.slot;
    let dom_id = slot.dom_id();
    let caption = slot.label();
    let (options, selected) = {
        let controller = state.controller.read();
        match slot {
            MetricSlot::Primary => (controller.primary_options(), controller.staged().primary.clone()),
            MetricSlot::Secondary => (controller.secondary_options(), controller.staged().secondary.clone()),
        }
    };

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.controller.with_mut(|c| match slot {
            MetricSlot::Primary => c.stage_primary(value),
            MetricSlot::Secondary => c.stage_secondary(value),
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: dom_id,
                style: "font-weight: bold; margin-right: 8px;",
                "{caption}"
            }
            select {
                id: dom_id,
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "(none)"
                }
                for opt in options.iter() {
                    option {
                        value: "{opt.value}",
                        disabled: opt.disabled,
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
