use crate::preview::{FileDescriptor, FileSelection};
use crate::utils::{format_bytes, truncate_string};
use chrono::{Local, TimeZone};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{prelude::*, widgets::*};
use std::{io, time::Duration};

struct AppState {
    files: Vec<FileDescriptor>,
    table_state: TableState,
    name_width: usize,
}

impl AppState {
    fn new(files: Vec<FileDescriptor>, name_width: usize) -> Self {
        let mut table_state = TableState::default();
        if !files.is_empty() {
            table_state.select(Some(0));
        }
        Self {
            files,
            table_state,
            name_width,
        }
    }

    fn next(&mut self) {
        if self.files.is_empty() {
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) if i >= self.files.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn previous(&mut self) {
        if self.files.is_empty() {
            return;
        }

        let i = match self.table_state.selected() {
            Some(0) => self.files.len() - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }
}

pub fn run_browse_tui(
    files: Vec<FileDescriptor>,
    name_width: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(files, name_width);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == event::KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                _ => {}
            }
        }
    }
}

/// 表格一行：文件名（截断）、大小、修改时间
fn row_cells(file: &FileDescriptor, name_width: usize) -> [String; 3] {
    let date_str = match file.modified.map(|ts| Local.timestamp_opt(ts, 0)) {
        Some(chrono::LocalResult::Single(dt)) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => "-".to_string(),
    };

    [
        truncate_string(&file.name, name_width),
        format_bytes(file.size),
        date_str,
    ]
}

fn footer_text(files: &[FileDescriptor]) -> String {
    format!(
        " {} 个文件，共 {} | ⬆⬇ 浏览 | q/Esc 退出",
        files.len(),
        format_bytes(files.total_size())
    )
}

fn ui(f: &mut Frame, app: &mut AppState) {
    let rects = Layout::default()
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    let title = Paragraph::new(" 📤 Upload Preview - 已选择的文件")
        .style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(title, rects[0]);

    let footer = Paragraph::new(footer_text(&app.files)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, rects[2]);

    if app.files.is_empty() {
        let empty = Paragraph::new("未选择任何文件")
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(empty, rects[1]);
        return;
    }

    let selected_style = Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    let header = ["Name", "Size", "Modified"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let selected_index = app.table_state.selected();
    let rows = app.files.iter().enumerate().map(|(i, file)| {
        let is_selected = selected_index == Some(i);
        let [name, size, date] = row_cells(file, app.name_width);

        let metadata_color = if is_selected {
            Color::White
        } else {
            Color::DarkGray
        };
        let name_color = if is_selected { Color::White } else { Color::Reset };

        Row::new(vec![
            Cell::from(name).style(Style::default().fg(name_color)),
            Cell::from(size).style(Style::default().fg(metadata_color)),
            Cell::from(date).style(Style::default().fg(metadata_color)),
        ])
        .height(1)
    });

    let t = Table::new(
        rows,
        [
            Constraint::Length(app.name_width as u16 + 2),
            Constraint::Length(12),
            Constraint::Length(20),
        ],
    )
    .header(Row::new(header).height(1).bottom_margin(1).top_margin(1))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Files "),
    )
    .row_highlight_style(selected_style)
    .highlight_symbol(">> ");

    f.render_stateful_widget(t, rects[1], &mut app.table_state);
}
