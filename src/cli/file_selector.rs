//! In-wizard file browser for picking a dataset to import
//!
//! The browser lists directories and regular files. CSV files (by
//! extension, any case) are highlighted, but any file can be picked: the
//! CSV check happens on import so that a wrong pick produces the usual
//! rejection notice.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::pipeline::is_csv_path;

/// A file or directory entry in the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// What the browser wants the wizard to do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    /// Keep browsing
    Stay,
    /// User picked a file
    Selected(PathBuf),
    /// User closed the browser
    Cancelled,
}

/// Browser state: current directory, its entries and the search filter
#[derive(Debug, Clone)]
pub struct FileBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected: usize,
    pub search: String,
    pub filtered: Vec<usize>,
}

impl FileBrowser {
    pub fn new(start_dir: PathBuf) -> Self {
        let entries = list_directory(&start_dir);
        let filtered: Vec<usize> = (0..entries.len()).collect();
        Self {
            current_dir: start_dir,
            entries,
            selected: 0,
            search: String::new(),
            filtered,
        }
    }

    /// Open in the user's home directory, falling back to the working directory
    pub fn at_home() -> Self {
        Self::new(dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    fn refresh(&mut self) {
        self.entries = list_directory(&self.current_dir);
        self.search.clear();
        self.filtered = (0..self.entries.len()).collect();
        self.selected = 0;
    }

    fn navigate_to(&mut self, path: PathBuf) {
        self.current_dir = path;
        self.refresh();
    }

    fn update_filter(&mut self) {
        let search_lower = self.search.to_lowercase();
        self.filtered = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.name.to_lowercase().contains(&search_lower))
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
    }

    /// Entry under the cursor, if any
    pub fn highlighted(&self) -> Option<&FileEntry> {
        self.filtered
            .get(self.selected)
            .and_then(|&idx| self.entries.get(idx))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> BrowserAction {
        match key.code {
            KeyCode::Enter => {
                if let Some(entry) = self.highlighted().cloned() {
                    if entry.is_dir {
                        self.navigate_to(entry.path);
                    } else {
                        return BrowserAction::Selected(entry.path);
                    }
                }
                BrowserAction::Stay
            }
            KeyCode::Backspace => {
                if self.search.is_empty() {
                    if let Some(parent) = self.current_dir.parent() {
                        self.navigate_to(parent.to_path_buf());
                    }
                } else {
                    self.search.pop();
                    self.update_filter();
                }
                BrowserAction::Stay
            }
            KeyCode::Esc => {
                // First Esc clears the filter, second closes
                if self.search.is_empty() {
                    BrowserAction::Cancelled
                } else {
                    self.search.clear();
                    self.update_filter();
                    BrowserAction::Stay
                }
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                BrowserAction::Stay
            }
            KeyCode::Down => {
                if self.selected + 1 < self.filtered.len() {
                    self.selected += 1;
                }
                BrowserAction::Stay
            }
            KeyCode::PageUp => {
                self.selected = self.selected.saturating_sub(10);
                BrowserAction::Stay
            }
            KeyCode::PageDown => {
                self.selected = (self.selected + 10).min(self.filtered.len().saturating_sub(1));
                BrowserAction::Stay
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.search.push(c);
                self.update_filter();
                BrowserAction::Stay
            }
            _ => BrowserAction::Stay,
        }
    }
}

/// List directory contents: ".." first, then directories, then files
pub fn list_directory(path: &Path) -> Vec<FileEntry> {
    let mut entries = Vec::new();

    if let Some(parent) = path.parent() {
        if parent != path {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            });
        }
    }

    if let Ok(read_dir) = std::fs::read_dir(path) {
        for entry in read_dir.flatten() {
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            // Skip hidden files/directories
            if name.starts_with('.') {
                continue;
            }

            entries.push(FileEntry {
                name,
                is_dir: entry_path.is_dir(),
                path: entry_path,
            });
        }
    }

    entries.sort_by(|a, b| {
        if a.name == ".." {
            return Ordering::Less;
        }
        if b.name == ".." {
            return Ordering::Greater;
        }
        match (a.is_dir, b.is_dir) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    });

    entries
}

fn truncate_path_start(path: &str, max_len: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len || max_len < 4 {
        path.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}

/// Draw the browser inside the wizard box
pub fn render_file_browser(f: &mut Frame, area: Rect, browser: &FileBrowser) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current path
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // File list
        ])
        .split(area);

    let path_str = browser.current_dir.display().to_string();
    let max_path_len = (chunks[0].width as usize).saturating_sub(12);
    let path_line = Line::from(vec![
        Span::styled("  Current: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            truncate_path_start(&path_str, max_path_len),
            Style::default().fg(Color::White),
        ),
    ]);
    f.render_widget(Paragraph::new(path_line), chunks[0]);

    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Filter ")
        .title_style(Style::default().fg(Color::DarkGray));
    let search_content = if browser.search.is_empty() {
        Line::from(vec![
            Span::styled("Type to filter...", Style::default().fg(Color::DarkGray)),
            Span::styled("\u{258c}", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(vec![
            Span::styled(browser.search.as_str(), Style::default().fg(Color::White)),
            Span::styled("\u{258c}", Style::default().fg(Color::Cyan)),
        ])
    };
    f.render_widget(Paragraph::new(search_content).block(search_block), chunks[1]);

    if browser.filtered.is_empty() {
        let msg = if browser.search.is_empty() {
            "Empty directory"
        } else {
            "No matching files"
        };
        f.render_widget(
            Paragraph::new(Span::styled(
                msg,
                Style::default().fg(Color::DarkGray).italic(),
            ))
            .alignment(Alignment::Center),
            chunks[2],
        );
        return;
    }

    let list_height = chunks[2].height as usize;
    let start_idx = if browser.selected >= list_height {
        browser.selected - list_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = browser
        .filtered
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(list_height)
        .map(|(display_idx, &entry_idx)| {
            let entry = &browser.entries[entry_idx];
            let is_csv = !entry.is_dir && is_csv_path(&entry.path);
            let icon = if entry.is_dir { "▸ " } else { "  " };
            let suffix = if entry.is_dir && entry.name != ".." { "/" } else { "" };

            let style = if display_idx == browser.selected {
                let bg = if entry.is_dir { Color::Cyan } else { Color::Green };
                Style::default().fg(Color::Black).bg(bg).bold()
            } else if entry.is_dir {
                Style::default().fg(Color::Cyan)
            } else if is_csv {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            ListItem::new(format!("  {}{}{}", icon, entry.name, suffix)).style(style)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(browser.selected.saturating_sub(start_idx)));
    f.render_stateful_widget(List::new(items), chunks[2], &mut list_state);
}
