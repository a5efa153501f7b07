//! End-to-end interaction scenarios driven through the public API.

use dropdown::prelude::*;

fn abc() -> Dropdown<i32> {
    Dropdown::new(DropdownConfig::new(vec![
        DropdownOption::new("A", 1),
        DropdownOption::new("B", 2),
        DropdownOption::new("C", 3),
    ]))
}

fn click_trigger<T>(dd: &mut Dropdown<T>) {
    let path = dd.region().trigger_path();
    dd.update(&InputEvent::Click(path));
}

fn focus_trigger<T>(dd: &mut Dropdown<T>) {
    let path = dd.region().trigger_path();
    dd.update(&InputEvent::FocusIn(path));
}

fn click_option<T>(dd: &mut Dropdown<T>, index: usize) {
    let path = dd.region().option_path(index).unwrap();
    dd.update(&InputEvent::Click(path));
}

fn press<T>(dd: &mut Dropdown<T>, key: &str) {
    dd.update(&InputEvent::key(key));
}

fn expanded<T>(dd: &Dropdown<T>) -> &'static str {
    dd.aria().trigger.aria_expanded()
}

fn selected<T>(dd: &Dropdown<T>, index: usize) -> &'static str {
    dd.aria().aria_selected(index).unwrap()
}

fn only_selected<T>(dd: &Dropdown<T>) -> Option<usize> {
    let aria = dd.aria();
    let marked: Vec<_> = aria.options.iter().filter(|o| o.selected).collect();
    assert!(marked.len() <= 1, "more than one option marked: {marked:?}");
    marked.first().map(|o| o.index)
}

mod rendering {
    use super::*;

    #[test]
    fn renders_options_and_trigger_class() {
        let dd = abc();
        let aria = dd.aria();
        assert_eq!(aria.options.len(), 3);
        assert_eq!(aria.trigger.class(), "dropdown-toggle");
        assert_eq!(aria.trigger.aria_haspopup(), "listbox");
    }

    #[test]
    fn toggle_sets_aria_expanded() {
        let mut dd = abc();
        assert_eq!(expanded(&dd), "false");
        click_trigger(&mut dd);
        assert_eq!(expanded(&dd), "true");
        click_trigger(&mut dd);
        assert_eq!(expanded(&dd), "false");
    }

    #[test]
    fn toggle_sets_active_class_on_listbox() {
        let mut dd = abc();
        assert_eq!(dd.aria().listbox.class(), "popover");
        click_trigger(&mut dd);
        assert_eq!(dd.aria().listbox.class(), "popover active");
        click_trigger(&mut dd);
        assert_eq!(dd.aria().listbox.class(), "popover");
    }
}

mod mouse {
    use super::*;

    fn opened() -> Dropdown<i32> {
        let mut dd = abc();
        click_trigger(&mut dd);
        dd
    }

    #[test]
    fn click_option_sets_aria_selected() {
        let mut dd = opened();
        click_option(&mut dd, 1);
        assert_eq!(selected(&dd, 1), "true");
        assert_eq!(only_selected(&dd), Some(1));
    }

    #[test]
    fn click_option_closes() {
        let mut dd = opened();
        click_option(&mut dd, 1);
        assert_eq!(expanded(&dd), "false");
        assert_eq!(dd.aria().listbox.class(), "popover");
    }

    #[test]
    fn click_option_sets_trigger_text() {
        let mut dd = opened();
        click_option(&mut dd, 1);
        assert_eq!(dd.aria().trigger.inner_html(), "<span>B</span>");
        assert_eq!(dd.selected_value(), Some(&2));
    }

    #[test]
    fn click_outside_closes() {
        let mut dd = opened();
        dd.update(&InputEvent::Click(Region::outside_path()));
        assert_eq!(expanded(&dd), "false");
    }

    #[test]
    fn click_on_listbox_padding_keeps_open() {
        let mut dd = opened();
        let path = dd.region().listbox_path();
        dd.update(&InputEvent::Click(path));
        assert!(dd.is_open());
    }

    #[test]
    fn pointer_down_outside_closes() {
        let mut dd = opened();
        dd.update(&InputEvent::pointer_down([Region::BODY]));
        assert!(!dd.is_open());
    }

    #[test]
    fn pointer_down_on_option_keeps_open() {
        let mut dd = opened();
        let option = dd.region().options()[1];
        dd.update(&InputEvent::pointer_down([
            Region::BODY,
            dd.region().root(),
            dd.region().listbox(),
            option,
        ]));
        assert!(dd.is_open());
    }

    #[test]
    fn focus_arriving_outside_closes() {
        let mut dd = opened();
        dd.update(&InputEvent::focus_in([Region::BODY]));
        assert!(!dd.is_open());
        assert_eq!(dd.focus(), Focus::Outside);
    }

    #[test]
    fn option_click_blur_does_not_close_early() {
        let mut dd = opened();
        focus_trigger(&mut dd);
        // Mouse down on a non-focusable option blurs the trigger first.
        dd.update(&InputEvent::FocusOut { related: None });
        assert!(dd.is_open());
        click_option(&mut dd, 2);
        assert_eq!(dd.selected_index(), Some(2));
    }

    #[test]
    fn focus_moving_outside_closes() {
        let mut dd = opened();
        dd.update(&InputEvent::FocusOut {
            related: Some(Region::outside_path()),
        });
        assert!(!dd.is_open());
    }
}

mod keyboard {
    use super::*;

    const NAV_KEYS: [&str; 7] = [" ", "Enter", "Escape", "ArrowDown", "ArrowUp", "Home", "End"];

    #[test]
    fn every_key_does_nothing_when_inactive() {
        for key in NAV_KEYS {
            let mut dd = abc();
            press(&mut dd, key);
            assert_eq!(expanded(&dd), "false", "{key:?}");
        }
    }

    #[test]
    fn space_opens_when_active() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, " ");
        assert_eq!(expanded(&dd), "true");
    }

    #[test]
    fn space_closes_when_open() {
        let mut dd = abc();
        click_trigger(&mut dd);
        assert_eq!(expanded(&dd), "true");
        focus_trigger(&mut dd);
        press(&mut dd, " ");
        assert_eq!(expanded(&dd), "false");
    }

    #[test]
    fn escape_does_nothing_when_not_open() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "Escape");
        assert_eq!(expanded(&dd), "false");
    }

    #[test]
    fn escape_closes_when_open() {
        let mut dd = abc();
        click_trigger(&mut dd);
        focus_trigger(&mut dd);
        press(&mut dd, "Escape");
        assert_eq!(expanded(&dd), "false");
    }

    #[test]
    fn escape_keeps_committed_selection() {
        let mut dd = abc().with_selected(0);
        focus_trigger(&mut dd);
        press(&mut dd, "End");
        press(&mut dd, "Escape");
        assert_eq!(dd.selected_index(), Some(0));
        assert_eq!(dd.aria().trigger.label.text(), "A");
    }

    #[test]
    fn arrow_down_opens_when_active() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "ArrowDown");
        assert_eq!(expanded(&dd), "true");
        assert_eq!(only_selected(&dd), Some(0));
    }

    #[test]
    fn arrow_down_selects_next_when_open() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "ArrowDown");
        assert_eq!(selected(&dd, 0), "true");
        press(&mut dd, "ArrowDown");
        assert_eq!(selected(&dd, 1), "true");
    }

    #[test]
    fn arrow_down_stops_on_last_when_not_looping() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        for expected in [0, 1, 2, 2] {
            press(&mut dd, "ArrowDown");
            assert_eq!(only_selected(&dd), Some(expected));
        }
    }

    #[test]
    fn arrow_down_loops_to_first_when_looping() {
        let mut dd = abc();
        dd.set_loop(true);
        focus_trigger(&mut dd);
        for expected in [0, 1, 2, 0] {
            press(&mut dd, "ArrowDown");
            assert_eq!(only_selected(&dd), Some(expected));
        }
    }

    #[test]
    fn arrow_up_opens_when_active() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "ArrowUp");
        assert_eq!(expanded(&dd), "true");
    }

    #[test]
    fn arrow_up_selects_previous_when_open() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        for _ in 0..3 {
            press(&mut dd, "ArrowDown");
        }
        assert_eq!(selected(&dd, 2), "true");
        press(&mut dd, "ArrowUp");
        assert_eq!(selected(&dd, 1), "true");
        press(&mut dd, "ArrowUp");
        assert_eq!(selected(&dd, 0), "true");
    }

    #[test]
    fn arrow_up_stops_on_first_when_not_looping() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        for _ in 0..3 {
            press(&mut dd, "ArrowDown");
        }
        for _ in 0..5 {
            press(&mut dd, "ArrowUp");
        }
        assert_eq!(only_selected(&dd), Some(0));
    }

    #[test]
    fn arrow_up_loops_to_last_when_looping() {
        let mut dd = abc();
        dd.set_loop(true);
        focus_trigger(&mut dd);
        for expected in [2, 1, 0, 2] {
            press(&mut dd, "ArrowUp");
            assert_eq!(only_selected(&dd), Some(expected));
        }
    }

    #[test]
    fn home_opens_and_selects_first() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "Home");
        assert_eq!(expanded(&dd), "true");
        assert_eq!(selected(&dd, 0), "true");
    }

    #[test]
    fn home_selects_first_when_open() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        for _ in 0..3 {
            press(&mut dd, "ArrowDown");
        }
        press(&mut dd, "Home");
        assert_eq!(only_selected(&dd), Some(0));
    }

    #[test]
    fn end_opens_and_selects_last() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "End");
        assert_eq!(expanded(&dd), "true");
        assert_eq!(selected(&dd, 2), "true");
    }

    #[test]
    fn end_selects_last_when_open() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "ArrowDown");
        press(&mut dd, "End");
        assert_eq!(only_selected(&dd), Some(2));
    }

    #[test]
    fn enter_on_focused_option_commits_it() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "ArrowDown");
        let path = dd.region().option_path(1).unwrap();
        dd.update(&InputEvent::FocusIn(path));
        press(&mut dd, "Enter");
        assert!(!dd.is_open());
        assert_eq!(dd.selected_index(), Some(1));
    }

    #[test]
    fn host_reported_focus_activates_keys() {
        let mut dd = abc();
        press(&mut dd, "ArrowDown");
        assert!(!dd.is_open());
        dd.set_focus(Focus::Trigger);
        assert!(dd.is_active());
        press(&mut dd, "ArrowDown");
        assert_eq!(dd.active_index(), Some(0));
        dd.set_focus(Focus::Outside);
        press(&mut dd, "Escape");
        assert!(!dd.is_open());
        assert!(!dd.is_active());
    }

    #[test]
    fn modified_keys_are_ignored() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        dd.update(&InputEvent::KeyDown(KeyEvent::new(Key::ArrowDown).with_ctrl()));
        assert!(!dd.is_open());
    }
}

mod listed_scenarios {
    use super::*;

    #[test]
    fn click_trigger_opens() {
        let mut dd = abc();
        click_trigger(&mut dd);
        assert_eq!(expanded(&dd), "true");
        assert!(dd.aria().listbox.has_class("active"));
    }

    #[test]
    fn two_arrow_downs_from_open_highlight_second() {
        let mut dd = abc();
        click_trigger(&mut dd);
        press(&mut dd, "ArrowDown");
        press(&mut dd, "ArrowDown");
        let aria = dd.aria();
        for (i, option) in aria.options.iter().enumerate() {
            assert_eq!(option.aria_selected(), if i == 1 { "true" } else { "false" });
        }
    }

    #[test]
    fn arrow_down_at_last_stays() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "End");
        assert_eq!(dd.active_index(), Some(2));
        press(&mut dd, "ArrowDown");
        assert_eq!(dd.active_index(), Some(2));
    }

    #[test]
    fn navigate_then_click_commits() {
        let mut dd = abc();
        click_trigger(&mut dd);
        press(&mut dd, "ArrowDown");
        press(&mut dd, "ArrowDown");
        click_option(&mut dd, 1);
        assert!(!dd.is_open());
        assert_eq!(dd.aria().trigger.label.text(), "B");
        assert_eq!(expanded(&dd), "false");
    }

    #[test]
    fn click_body_closes() {
        let mut dd = abc();
        click_trigger(&mut dd);
        dd.update(&InputEvent::click([Region::BODY]));
        assert_eq!(expanded(&dd), "false");
    }

    #[test]
    fn reopen_highlights_committed_option() {
        let mut dd = abc();
        click_trigger(&mut dd);
        click_option(&mut dd, 2);
        click_trigger(&mut dd);
        assert_eq!(dd.active_index(), Some(2));
        assert_eq!(only_selected(&dd), Some(2));
    }
}

mod reconfiguration {
    use super::*;

    #[test]
    fn selection_survives_when_key_survives() {
        let mut dd = abc();
        click_trigger(&mut dd);
        click_option(&mut dd, 1);
        dd.set_options(vec![DropdownOption::new("B", 20), DropdownOption::new("D", 40)]);
        assert_eq!(dd.selected_index(), Some(0));
        assert_eq!(dd.selected_value(), Some(&20));
    }

    #[test]
    fn selection_clears_when_key_disappears() {
        let mut dd = abc().with_selected(2);
        dd.set_options(vec![DropdownOption::new("A", 1)]);
        assert_eq!(dd.selected_index(), None);
        assert!(dd.aria().trigger.label.is_placeholder());
    }

    #[test]
    fn empty_list_ignores_navigation() {
        let mut dd: Dropdown<i32> = Dropdown::new(DropdownConfig::default().placeholder("None"));
        focus_trigger(&mut dd);
        for key in ["ArrowDown", "ArrowUp", "Home", "End"] {
            press(&mut dd, key);
            assert!(!dd.is_open(), "{key:?}");
        }
        press(&mut dd, " ");
        assert!(dd.is_open());
        assert_eq!(dd.active_index(), None);
        assert_eq!(dd.aria().trigger.inner_html(), "<span>None</span>");
    }

    #[test]
    fn loop_change_while_open_keeps_active() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "End");
        assert_eq!(dd.active_index(), Some(2));
        dd.set_loop(true);
        assert!(dd.is_open());
        assert_eq!(dd.active_index(), Some(2));
        press(&mut dd, "ArrowDown");
        assert_eq!(dd.active_index(), Some(0));
    }

    #[test]
    fn active_follows_its_key_while_open() {
        let mut dd = abc();
        focus_trigger(&mut dd);
        press(&mut dd, "ArrowDown");
        press(&mut dd, "ArrowDown");
        assert_eq!(dd.active_index(), Some(1));
        dd.set_options(vec![
            DropdownOption::new("X", 10),
            DropdownOption::new("Y", 20),
            DropdownOption::new("B", 2),
        ]);
        assert!(dd.is_open());
        assert_eq!(dd.active_index(), Some(2));
        assert_eq!(dd.aria().aria_selected(2), Some("true"));
    }
}

mod simulation {
    use super::*;

    #[test]
    fn simulator_records_each_render() {
        let mut sim = Simulator::new(abc());
        let trigger = sim.dropdown().region().trigger_path();
        let option = sim.dropdown().region().option_path(1).unwrap();
        sim.send_all([
            InputEvent::Click(trigger.clone()),
            InputEvent::FocusIn(trigger),
            InputEvent::key("ArrowDown"),
            InputEvent::key("ArrowDown"),
            InputEvent::Click(option),
        ]);
        sim.run_until_empty();

        let expanded: Vec<_> = sim
            .steps()
            .iter()
            .map(|s| s.projection.trigger.expanded)
            .collect();
        assert_eq!(expanded, vec![true, true, true, true, false]);
        assert_eq!(sim.stats().events, 5);
        assert_eq!(sim.stats().ignored, 1);
        assert_eq!(
            sim.steps()[4].transition.and_then(|t| t.close_reason()),
            Some(CloseReason::Selection)
        );
        insta::assert_snapshot!(sim.dropdown().view(), @r#"
        <div class="dropdown">
          <button type="button" class="dropdown-toggle" aria-haspopup="listbox" aria-expanded="false"><span>B</span></button>
          <ul class="popover" role="listbox">
            <li role="option" aria-selected="false">A</li>
            <li role="option" aria-selected="true">B</li>
            <li role="option" aria-selected="false">C</li>
          </ul>
        </div>
        "#);
    }

    #[test]
    fn script_replays_through_simulator() {
        let dd = abc();
        let events = dropdown::script::parse_script(
            "focus trigger\nkey End\nkey Space\n# committed nothing\nkey Enter\n",
            dd.region(),
        )
        .unwrap();
        let mut sim = Simulator::new(dd);
        sim.send_all(events.into_iter().map(|e| e.event));
        sim.run_until_empty();
        assert!(sim.dropdown().is_open());
        assert_eq!(sim.dropdown().active_index(), None);
    }
}
