//! Policy tests
//!
//! Targeted boundary checks plus full second-by-second simulations of the
//! common presets, so every rule is pinned at the exact transition where
//! it fires.

use super::{Announcement, TickTransition, announcement_text, decide};
use crate::i18n::Language;

/// Run a whole countdown from `total` to zero in one-second steps and
/// collect every announcement with the remaining value it fired at.
fn simulate(total: u32) -> Vec<(u32, Announcement)> {
    let mut fired = Vec::new();
    let mut remaining = total;
    while remaining > 0 {
        let previous = remaining;
        remaining -= 1;
        if let Some(announcement) = decide(TickTransition::new(previous, remaining, total)) {
            fired.push((remaining, announcement));
        }
    }
    fired
}

fn step(previous: u32, total: u32) -> Option<Announcement> {
    decide(TickTransition::new(previous, previous - 1, total))
}

// ─────────────────────────────────────────────────────────────────────────────
// Completion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn reaching_zero_announces_completion() {
    for total in [1, 10, 60, 300, 900, 3600] {
        assert_eq!(
            step(1, total),
            Some(Announcement::Finished),
            "total {total}"
        );
    }
}

#[test]
fn completion_wins_over_the_final_milestone() {
    // A 300-second timer crosses its only milestone exactly at zero.
    assert_eq!(step(1, 300), Some(Announcement::Finished));
}

// ─────────────────────────────────────────────────────────────────────────────
// Elapsed milestones
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn five_minute_milestones_report_elapsed_and_remaining() {
    assert_eq!(
        step(3301, 3600),
        Some(Announcement::ElapsedMilestone {
            elapsed_minutes: 5,
            remaining_minutes: 55,
        })
    );
    assert_eq!(
        step(3001, 3600),
        Some(Announcement::ElapsedMilestone {
            elapsed_minutes: 10,
            remaining_minutes: 50,
        })
    );
    assert_eq!(
        step(1801, 3600),
        Some(Announcement::ElapsedMilestone {
            elapsed_minutes: 30,
            remaining_minutes: 30,
        })
    );
    assert_eq!(
        step(601, 900),
        Some(Announcement::ElapsedMilestone {
            elapsed_minutes: 5,
            remaining_minutes: 10,
        })
    );
    assert_eq!(
        step(1501, 1800),
        Some(Announcement::ElapsedMilestone {
            elapsed_minutes: 5,
            remaining_minutes: 25,
        })
    );
}

#[test]
fn milestones_stay_quiet_between_boundaries() {
    assert_eq!(step(3400, 3600), None);
    assert_eq!(step(2000, 3600), None);
    assert_eq!(step(3302, 3600), None);
    assert_eq!(step(700, 900), None);
}

#[test]
fn five_minutes_remaining_goes_to_whichever_rule_matches() {
    // With total 3600 the transition to 300 remaining crosses the
    // 55-minute milestone, and rule order gives the milestone the tick.
    assert_eq!(
        step(301, 3600),
        Some(Announcement::ElapsedMilestone {
            elapsed_minutes: 55,
            remaining_minutes: 5,
        })
    );
    // With total 500 no milestone is crossed there, so the warning runs.
    assert_eq!(
        step(301, 500),
        Some(Announcement::MinutesLeft { minutes: 5 })
    );
}

#[test]
fn late_milestones_defer_once_the_remainder_rounds_to_zero() {
    // Crossing five elapsed minutes with exactly one minute left still
    // belongs to the milestone, like any other crossing.
    assert_eq!(
        step(61, 360),
        Some(Announcement::ElapsedMilestone {
            elapsed_minutes: 5,
            remaining_minutes: 1,
        })
    );
    // Thirty seconds rounds up to a minute, so the milestone still fires.
    assert_eq!(
        step(31, 330),
        Some(Announcement::ElapsedMilestone {
            elapsed_minutes: 5,
            remaining_minutes: 1,
        })
    );
    // Twenty rounds to zero; the final-minute numeral takes over.
    assert_eq!(step(21, 320), Some(Announcement::SecondsLeft { seconds: 20 }));
}

#[test]
fn short_timers_have_no_milestones() {
    let fired = simulate(300);
    assert!(
        fired
            .iter()
            .all(|(_, a)| !matches!(a, Announcement::ElapsedMilestone { .. })),
        "a five-minute timer crosses its only milestone at zero"
    );
    assert!(simulate(120)
        .iter()
        .all(|(_, a)| !matches!(a, Announcement::ElapsedMilestone { .. })));
}

// ─────────────────────────────────────────────────────────────────────────────
// Minute warnings and the final minute
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn whole_minute_warnings_inside_the_window() {
    assert_eq!(step(241, 300), Some(Announcement::MinutesLeft { minutes: 4 }));
    assert_eq!(step(181, 300), Some(Announcement::MinutesLeft { minutes: 3 }));
    assert_eq!(step(121, 300), Some(Announcement::MinutesLeft { minutes: 2 }));
    assert_eq!(step(121, 3600), Some(Announcement::MinutesLeft { minutes: 2 }));
}

#[test]
fn no_warning_above_the_window_or_off_the_minute() {
    assert_eq!(step(361, 900), None, "six minutes left is outside the window");
    assert_eq!(step(242, 300), None);
    assert_eq!(step(150, 300), None);
}

#[test]
fn one_minute_warning_then_bare_seconds() {
    assert_eq!(step(61, 3600), Some(Announcement::OneMinuteLeft));
    assert_eq!(step(60, 3600), Some(Announcement::SecondsLeft { seconds: 59 }));
    assert_eq!(step(31, 3600), Some(Announcement::SecondsLeft { seconds: 30 }));
    assert_eq!(step(2, 3600), Some(Announcement::SecondsLeft { seconds: 1 }));
}

#[test]
fn every_second_of_the_final_minute_speaks() {
    for previous in 2..=60 {
        assert_eq!(
            step(previous, 900),
            Some(Announcement::SecondsLeft {
                seconds: previous - 1
            }),
            "previous {previous}"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Full simulations
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn simulation_covers_every_boundary_exactly_once() {
    for total in [300, 900, 1800, 3600] {
        let fired = simulate(total);

        let finishes = fired
            .iter()
            .filter(|(_, a)| matches!(a, Announcement::Finished))
            .count();
        assert_eq!(finishes, 1, "total {total}");
        assert_eq!(fired.last(), Some(&(0, Announcement::Finished)));

        // Milestones: one per crossed multiple of 300 except the one that
        // lands on zero.
        let milestones: Vec<u32> = fired
            .iter()
            .filter_map(|(at, a)| {
                matches!(a, Announcement::ElapsedMilestone { .. }).then_some(*at)
            })
            .collect();
        let expected: Vec<u32> = (1..)
            .map(|k| k * 300)
            .take_while(|&elapsed| elapsed < total)
            .map(|elapsed| total - elapsed)
            .collect();
        assert_eq!(milestones, expected, "total {total}");

        // Warnings at 240, 180, 120 remaining (when the total reaches
        // them), the one-minute call at 60, and 59 bare numerals.
        for minutes in 2..=4 {
            let at = minutes * 60;
            if at < total {
                assert!(
                    fired.contains(&(at, Announcement::MinutesLeft { minutes })),
                    "total {total}, {minutes} minutes"
                );
            }
        }
        assert!(fired.contains(&(60, Announcement::OneMinuteLeft)));
        let numerals = fired
            .iter()
            .filter(|(_, a)| matches!(a, Announcement::SecondsLeft { .. }))
            .count();
        assert_eq!(numerals, 59, "total {total}");
    }
}

#[test]
fn each_remaining_value_announces_at_most_once() {
    for total in [300, 900, 3600] {
        let fired = simulate(total);
        let mut seen = std::collections::HashSet::new();
        for (at, _) in &fired {
            assert!(seen.insert(*at), "total {total}, remaining {at} fired twice");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Localization and edge cases
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decisions_are_language_independent() {
    for total in [300, 3600] {
        let mut remaining = total;
        while remaining > 0 {
            let transition = TickTransition::new(remaining, remaining - 1, total);
            let vi = announcement_text(transition, Language::Vi);
            let en = announcement_text(transition, Language::En);
            assert_eq!(vi.is_some(), en.is_some(), "remaining {remaining}");
            remaining -= 1;
        }
    }
}

#[test]
fn rendered_texts_match_the_tables() {
    let milestone = decide(TickTransition::new(3301, 3300, 3600)).unwrap();
    assert_eq!(milestone.render(Language::Vi), "Đã qua 5 phút, còn 55 phút");
    assert_eq!(milestone.render(Language::En), "5 minutes elapsed, 55 left");

    assert_eq!(
        Announcement::OneMinuteLeft.render(Language::Vi),
        "Còn 1 phút"
    );
    assert_eq!(
        Announcement::MinutesLeft { minutes: 3 }.render(Language::En),
        "3 minutes left"
    );
    assert_eq!(Announcement::Finished.render(Language::Vi), "Hết giờ!");
    assert_eq!(Announcement::Finished.render(Language::En), "Time's up!");
}

#[test]
fn bare_numerals_are_identical_across_languages() {
    let numeral = Announcement::SecondsLeft { seconds: 42 };
    assert_eq!(numeral.render(Language::Vi), "42");
    assert_eq!(numeral.render(Language::En), "42");
}

#[test]
fn zero_total_never_announces() {
    assert_eq!(decide(TickTransition::new(0, 0, 0)), None);
    assert_eq!(decide(TickTransition::new(1, 0, 0)), None);
}

#[test]
fn out_of_contract_input_does_not_panic() {
    // Remaining above the total saturates instead of underflowing.
    assert_eq!(decide(TickTransition::new(400, 399, 300)), None);
    // A non-unit jump still yields at most one announcement.
    let jumped = decide(TickTransition::new(3600, 3000, 3600));
    assert_eq!(
        jumped,
        Some(Announcement::ElapsedMilestone {
            elapsed_minutes: 5,
            remaining_minutes: 50,
        })
    );
}
