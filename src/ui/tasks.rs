//! 任务列表主界面

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, InputMode};

use super::components::{
    draft_input, empty_state, footer, header, search_bar, tabs, task_list, toast,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let state = app.client.state();
    let view = state.view();

    // 是否显示搜索框：正在输入或有搜索内容
    let show_search = app.mode == InputMode::Search || !state.search_term.is_empty();

    let [header_area, draft_area, tabs_area, search_area, list_area, footer_area] =
        Layout::vertical([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Length(draft_input::DRAFT_HEIGHT),
            Constraint::Length(2),
            Constraint::Length(if show_search { 1 } else { 0 }),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);

    header::render(frame, header_area, &app.api_label, view.total, &colors);
    draft_input::render(
        frame,
        draft_area,
        &state.draft_title,
        app.mode == InputMode::EditingDraft,
        &colors,
    );
    tabs::render(frame, tabs_area, state.filter_mode, &view, &colors);

    if show_search {
        search_bar::render(
            frame,
            search_area,
            &state.search_term,
            view.visible.len(),
            app.mode == InputMode::Search,
            &colors,
        );
    }

    if view.visible.is_empty() {
        empty_state::render(
            frame,
            list_area,
            state.filter_mode,
            !state.search_term.trim().is_empty(),
            &colors,
        );
    } else {
        task_list::render(frame, list_area, &view.visible, &mut app.list_state, &colors);
    }

    footer::render(
        frame,
        footer_area,
        app.mode,
        !view.visible.is_empty(),
        &colors,
    );

    if let Some(message) = app.async_ops.loading_message() {
        toast::render_loading(frame, &message, &colors);
    }
}
