//! Navigation states and pure transition functions
//!
//! The session is a finite state machine: CategoryList -> ToolList ->
//! ToolDetail -> Terminated. Transitions are pure functions of the current
//! state and the (already special-command-filtered) user input; the selected
//! category and tool travel inside the state value, never as globals.
//! Invalid input never advances the machine.

use crate::catalog::ToolRecord;

/// Where the session currently is
#[derive(Debug, Clone, PartialEq)]
pub enum NavState {
    CategoryList,
    ToolList(String),
    ToolDetail {
        category: String,
        tool: ToolRecord,
    },
    Terminated,
}

/// Outcome of a list-level transition
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Move to a new state
    To(NavState),
    /// Keep the current state and report an input error
    Stay(&'static str),
}

/// Outcome of a tool-detail transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailStep {
    /// Empty input confirms the launch
    Launch,
    BackToTools,
    Exit,
    /// Unrecognized input; re-issue the prompt
    Stay,
}

/// Outcome of the post-launch prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostLaunchStep {
    MainMenu,
    Exit,
}

/// Parse a 1-based list selection. `count + 1` is the trailing menu entry
/// (exit at the category level, back at the tool level).
fn parse_selection(raw: &str, count: usize) -> Option<usize> {
    raw.parse::<usize>()
        .ok()
        .filter(|&n| n >= 1 && n <= count + 1)
}

/// CategoryList transition: numeric choice, exit entry, or error
pub fn transition_category_list(raw: &str, categories: &[&str]) -> Step {
    if raw.eq_ignore_ascii_case("exit") || raw.eq_ignore_ascii_case("quit") {
        return Step::To(NavState::Terminated);
    }
    if raw.is_empty() {
        return Step::Stay("");
    }
    match parse_selection(raw, categories.len()) {
        Some(n) if n <= categories.len() => {
            Step::To(NavState::ToolList(categories[n - 1].to_string()))
        }
        Some(_) => Step::To(NavState::Terminated),
        None => Step::Stay("Invalid choice, please try again"),
    }
}

/// ToolList transition: numeric choice, back entry/command, exit, or error
pub fn transition_tool_list(raw: &str, category: &str, tools: &[ToolRecord]) -> Step {
    if raw.eq_ignore_ascii_case("exit") || raw.eq_ignore_ascii_case("quit") {
        return Step::To(NavState::Terminated);
    }
    if raw.eq_ignore_ascii_case("b") || raw.eq_ignore_ascii_case("back") {
        return Step::To(NavState::CategoryList);
    }
    if raw.is_empty() {
        return Step::Stay("");
    }
    match parse_selection(raw, tools.len()) {
        Some(n) if n <= tools.len() => Step::To(NavState::ToolDetail {
            category: category.to_string(),
            tool: tools[n - 1].clone(),
        }),
        Some(_) => Step::To(NavState::CategoryList),
        None => Step::Stay("Enter a valid number or command"),
    }
}

/// ToolDetail transition: Enter launches, b goes back, x/exit terminates,
/// anything else re-issues the prompt
pub fn transition_tool_detail(raw: &str) -> DetailStep {
    if raw.is_empty() {
        DetailStep::Launch
    } else if raw.eq_ignore_ascii_case("b") || raw.eq_ignore_ascii_case("back") {
        DetailStep::BackToTools
    } else if raw.eq_ignore_ascii_case("x")
        || raw.eq_ignore_ascii_case("exit")
        || raw.eq_ignore_ascii_case("quit")
    {
        DetailStep::Exit
    } else {
        DetailStep::Stay
    }
}

/// Post-launch prompt: x/exit terminates, anything else returns to the menu
pub fn transition_post_launch(raw: &str) -> PostLaunchStep {
    if raw.eq_ignore_ascii_case("x")
        || raw.eq_ignore_ascii_case("exit")
        || raw.eq_ignore_ascii_case("quit")
    {
        PostLaunchStep::Exit
    } else {
        PostLaunchStep::MainMenu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATS: [&str; 4] = ["Recon", "Scan", "Exploit", "Capture"];

    fn tools(n: usize) -> Vec<ToolRecord> {
        (0..n)
            .map(|i| ToolRecord::new(format!("tool{}", i), "", format!("t{}.py", i), "py"))
            .collect()
    }

    #[test]
    fn test_category_numeric_choice_in_range() {
        let step = transition_category_list("2", &CATS);
        assert_eq!(step, Step::To(NavState::ToolList("Scan".to_string())));
    }

    #[test]
    fn test_category_count_plus_one_terminates() {
        let step = transition_category_list("5", &CATS);
        assert_eq!(step, Step::To(NavState::Terminated));
    }

    #[test]
    fn test_category_exit_command_terminates() {
        assert_eq!(transition_category_list("exit", &CATS), Step::To(NavState::Terminated));
        assert_eq!(transition_category_list("quit", &CATS), Step::To(NavState::Terminated));
    }

    #[test]
    fn test_category_out_of_range_stays_with_error() {
        match transition_category_list("6", &CATS) {
            Step::Stay(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Stay, got {:?}", other),
        }
    }

    #[test]
    fn test_category_non_numeric_stays_with_error() {
        match transition_category_list("abc", &CATS) {
            Step::Stay(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Stay, got {:?}", other),
        }
    }

    #[test]
    fn test_category_empty_input_stays_silently() {
        assert_eq!(transition_category_list("", &CATS), Step::Stay(""));
    }

    #[test]
    fn test_tool_list_choice_opens_detail() {
        let ts = tools(3);
        match transition_tool_list("3", "Recon", &ts) {
            Step::To(NavState::ToolDetail { category, tool }) => {
                assert_eq!(category, "Recon");
                assert_eq!(tool.name, "tool2");
            }
            other => panic!("expected ToolDetail, got {:?}", other),
        }
    }

    #[test]
    fn test_tool_list_back_always_returns_to_categories() {
        let ts = tools(3);
        assert_eq!(transition_tool_list("b", "Recon", &ts), Step::To(NavState::CategoryList));
        assert_eq!(transition_tool_list("back", "Scan", &ts), Step::To(NavState::CategoryList));
        assert_eq!(transition_tool_list("B", "Exploit", &ts), Step::To(NavState::CategoryList));
    }

    #[test]
    fn test_tool_list_count_plus_one_is_back() {
        let ts = tools(3);
        assert_eq!(transition_tool_list("4", "Recon", &ts), Step::To(NavState::CategoryList));
    }

    #[test]
    fn test_tool_list_exit_terminates() {
        let ts = tools(2);
        assert_eq!(transition_tool_list("exit", "Recon", &ts), Step::To(NavState::Terminated));
    }

    #[test]
    fn test_tool_list_invalid_stays() {
        let ts = tools(2);
        assert!(matches!(transition_tool_list("9", "Recon", &ts), Step::Stay(_)));
        assert!(matches!(transition_tool_list("zzz", "Recon", &ts), Step::Stay(_)));
    }

    #[test]
    fn test_detail_enter_launches() {
        assert_eq!(transition_tool_detail(""), DetailStep::Launch);
    }

    #[test]
    fn test_detail_back_and_exit() {
        assert_eq!(transition_tool_detail("b"), DetailStep::BackToTools);
        assert_eq!(transition_tool_detail("x"), DetailStep::Exit);
        assert_eq!(transition_tool_detail("exit"), DetailStep::Exit);
    }

    #[test]
    fn test_detail_unknown_input_stays() {
        assert_eq!(transition_tool_detail("yes"), DetailStep::Stay);
        assert_eq!(transition_tool_detail("1"), DetailStep::Stay);
    }

    #[test]
    fn test_post_launch_enter_returns_to_menu() {
        assert_eq!(transition_post_launch(""), PostLaunchStep::MainMenu);
        assert_eq!(transition_post_launch("anything"), PostLaunchStep::MainMenu);
    }

    #[test]
    fn test_post_launch_x_exits() {
        assert_eq!(transition_post_launch("x"), PostLaunchStep::Exit);
        assert_eq!(transition_post_launch("exit"), PostLaunchStep::Exit);
    }
}
