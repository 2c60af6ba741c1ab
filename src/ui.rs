use crate::app::{App, FetchState};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let [panel_area, result_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(frame.area());

    frame.render_widget(search_panel(app), panel_area);

    let results = Paragraph::new(result_lines(&app.state))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Result "));
    frame.render_widget(results, result_area);
}

/// The search bar: query text, category selector, and the action control.
/// The control renders dimmed while the input is empty.
fn search_panel(app: &App) -> Paragraph<'_> {
    let get_style = if app.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let line = Line::from(vec![
        Span::raw(app.input.as_str()),
        Span::styled("█", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", app.selected_category.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled("[ Get ]", get_style),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search (Tab: mode, Enter: get, Esc: quit) "),
    )
}

/// Renders the result pane body for the current fetch state.
pub fn result_lines(state: &FetchState) -> Vec<Line<'static>> {
    match state {
        FetchState::Pending => vec![Line::from("Loading...")],
        FetchState::Failed(message) => vec![Line::styled(
            format!("Something went wrong: {}", message),
            Style::default().fg(Color::Red),
        )],
        FetchState::User(user) => vec![
            Line::from(format!("Name: {}", user.display_name())),
            Line::from(format!("Number of Repositories: {}", user.public_repos)),
        ],
        FetchState::Repos(repos) => {
            if repos.is_empty() {
                return vec![Line::from("not found")];
            }
            let mut lines = Vec::with_capacity(repos.len() * 3);
            for repo in repos {
                lines.push(Line::from(format!("Repository Name: {}", repo.name)));
                lines.push(Line::from(format!("Number of Stars: {}", repo.stargazers_count)));
                lines.push(Line::from(""));
            }
            lines
        }
    }
}
