//! Menu navigation - state machine and session controller

mod controller;
mod state;

pub use controller::MenuController;
pub use state::{DetailStep, NavState, PostLaunchStep, Step, transition_category_list,
    transition_post_launch, transition_tool_detail, transition_tool_list};
