use crate::libs::clock::format_minutes_12h;
use crate::libs::event::{EventKind, TimelineEvent};

/// Builds the human-readable summary of a workday from events already in
/// compositor order. Presentation only; consumes the ordering contract and
/// nothing else from the engine.
pub fn narrative_summary(sorted_events: &[TimelineEvent], employee: &str) -> String {
    if sorted_events.len() < 2 {
        return String::new();
    }

    let mut phrases = vec![format!(
        "{} clocked in at {}.",
        employee,
        format_minutes_12h(sorted_events[0].minutes)
    )];

    for event in sorted_events {
        let mut label = event.label.to_lowercase();
        if label.contains("break") {
            label = "a break".to_string();
        }

        match event.kind {
            EventKind::BreakStart => phrases.push(format!("Took {} at {}", label, format_minutes_12h(event.minutes))),
            EventKind::BreakEnd => phrases.push(format!("and returned at {}.", format_minutes_12h(event.minutes))),
            EventKind::WorkEnd => phrases.push(format!("Finally, the shift ended at {}.", format_minutes_12h(event.minutes))),
            EventKind::WorkStart => {}
        }
    }

    phrases.join(" ")
}
