use charmbooks::api::{ApiClient, DEFAULT_SERVER_URL};
use charmbooks::app::{App, BookField, CharmField, Dialog, Focus, Screen, UiIntent};
use charmbooks::ui;
use charmbooks::widgets::InputField;

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version" || arg == "-V") {
        println!("charmbooks {VERSION}");
        return Ok(());
    }

    color_eyre::install()?;
    init_tracing();
    setup_panic_hook();

    let server = server_url();

    // All operations are cooperative async tasks sequenced by user
    // interaction; a current-thread runtime is all this client needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(&server))
}

/// Resolve the server base URL: `--server <url>` wins, then the
/// `CHARMBOOKS_SERVER` environment variable, then the default.
fn server_url() -> String {
    let args: Vec<String> = std::env::args().collect();
    for (i, arg) in args.iter().enumerate() {
        if arg == "--server" {
            if let Some(url) = args.get(i + 1) {
                return url.clone();
            }
        }
    }
    std::env::var("CHARMBOOKS_SERVER").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}

/// File-backed tracing, enabled only when `RUST_LOG` is set. The raw
/// terminal is never written to.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create("charmbooks.log") else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// Ensure the terminal is usable again if we panic mid-draw.
fn setup_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

async fn run(server: &str) -> Result<()> {
    let api = ApiClient::new(server)?;
    let mut app = App::new(api);
    app.boot().await;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app).await;

    restore_terminal(&mut terminal)?;
    result
}

fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut events = EventStream::new();
    let mut terminal_width = terminal.size()?.width;

    loop {
        // Draw only when state changed.
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        match events.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                app.mark_dirty();
                if let Some(intent) = handle_key(app, key, terminal_width) {
                    // Awaited inline: user-triggered operations never
                    // overlap within this client.
                    app.dispatch(intent).await;
                }
                if app.should_quit {
                    return Ok(());
                }
            }
            Some(Ok(Event::Resize(width, _))) => {
                terminal_width = width;
                app.mark_dirty();
            }
            Some(Ok(_)) => {}
            Some(Err(err)) => return Err(err.into()),
            None => return Ok(()),
        }
    }
}

/// Map one key press to UI mutations and, possibly, an intent.
fn handle_key(app: &mut App, key: KeyEvent, terminal_width: u16) -> Option<UiIntent> {
    // A blocking notice swallows everything until dismissed.
    if app.notice.is_some() {
        app.notice = None;
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return None;
    }

    if app.dialog.is_some() {
        return handle_dialog_key(app, key);
    }

    match app.screen {
        Screen::Login => handle_login_key(app, key),
        Screen::Library => handle_library_key(app, key, terminal_width),
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Option<UiIntent> {
    let mut dialog = app.dialog.take()?;
    let mut keep_open = true;
    let mut intent = None;

    match &mut dialog {
        Dialog::NewBook(title) => match key.code {
            KeyCode::Esc => keep_open = false,
            KeyCode::Enter => {
                keep_open = false;
                let title = title.content().trim().to_string();
                // An empty title cancels, like an empty prompt reply.
                if !title.is_empty() {
                    intent = Some(UiIntent::CreateBook { title });
                }
            }
            _ => edit_field(title, key),
        },

        Dialog::CharmEditor(form) => match key.code {
            KeyCode::Esc => keep_open = false,
            KeyCode::Enter => {
                keep_open = false;
                intent = Some(UiIntent::SubmitCharm {
                    existing_id: form.existing_id.clone(),
                    draft: form.draft(),
                });
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match form.field {
                    CharmField::Shape => form.cycle_shape(forward),
                    CharmField::Color => form.cycle_color(forward),
                    _ => {
                        if let Some(field) = form.active_field() {
                            if forward {
                                field.move_right();
                            } else {
                                field.move_left();
                            }
                        }
                    }
                }
            }
            _ => {
                if let Some(field) = form.active_field() {
                    edit_field(field, key);
                }
            }
        },

        Dialog::ConfirmDeleteCharm { id, .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                keep_open = false;
                intent = Some(UiIntent::DeleteCharm(id.clone()));
            }
            KeyCode::Char('n') | KeyCode::Esc => keep_open = false,
            _ => {}
        },

        Dialog::ConfirmDeleteBook { id, .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                keep_open = false;
                intent = Some(UiIntent::DeleteBook(id.clone()));
            }
            KeyCode::Char('n') | KeyCode::Esc => keep_open = false,
            _ => {}
        },
    }

    if keep_open {
        app.dialog = Some(dialog);
    }
    intent
}

fn handle_login_key(app: &mut App, key: KeyEvent) -> Option<UiIntent> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login_form.toggle_field();
            None
        }
        KeyCode::Enter => login_intent(app, false),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            login_intent(app, true)
        }
        _ => {
            edit_field(app.login_form.active_field(), key);
            None
        }
    }
}

/// Minimal presence check before submission; the server does the rest.
fn login_intent(app: &mut App, register: bool) -> Option<UiIntent> {
    let email = app.login_form.email.content().trim().to_string();
    let passcode = app.login_form.passcode.content().to_string();
    if email.is_empty() || passcode.is_empty() {
        app.notice = Some("Enter email and passcode".to_string());
        return None;
    }
    Some(if register {
        UiIntent::Register { email, passcode }
    } else {
        UiIntent::Login { email, passcode }
    })
}

fn handle_library_key(app: &mut App, key: KeyEvent, terminal_width: u16) -> Option<UiIntent> {
    // Keys that work regardless of panel focus.
    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(UiIntent::SaveBook);
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Grid => Focus::BookForm,
                Focus::BookForm => Focus::Grid,
            };
            return None;
        }
        KeyCode::Char('[') => return app.neighbor_book_id(-1).map(UiIntent::SelectBook),
        KeyCode::Char(']') => return app.neighbor_book_id(1).map(UiIntent::SelectBook),
        _ => {}
    }

    match app.focus {
        Focus::BookForm => handle_book_form_key(app, key),
        Focus::Grid => handle_grid_key(app, key, terminal_width),
    }
}

fn handle_book_form_key(app: &mut App, key: KeyEvent) -> Option<UiIntent> {
    match key.code {
        KeyCode::Up => app.book_form.prev_field(),
        KeyCode::Down | KeyCode::Enter => app.book_form.next_field(),
        KeyCode::Char(' ') if app.book_form.field == BookField::Public => {
            app.book_form.is_public = !app.book_form.is_public;
        }
        _ => {
            if let Some(field) = app.book_form.active_field() {
                edit_field(field, key);
            }
        }
    }
    None
}

fn handle_grid_key(app: &mut App, key: KeyEvent, terminal_width: u16) -> Option<UiIntent> {
    let cols = ui::grid_columns(terminal_width) as isize;
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.move_charm_cursor(-1);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.move_charm_cursor(1);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_charm_cursor(-cols);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_charm_cursor(cols);
            None
        }
        KeyCode::Enter | KeyCode::Char('c') => app
            .charm_under_cursor()
            .map(|charm| UiIntent::CopyCharm(charm.id.clone())),
        KeyCode::Char('a') => {
            app.open_charm_editor(None);
            None
        }
        KeyCode::Char('e') => {
            let charm = app.charm_under_cursor().cloned();
            if let Some(charm) = charm {
                app.open_charm_editor(Some(&charm));
            }
            None
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.confirm_delete_selected_charm();
            None
        }
        KeyCode::Char('D') => {
            app.confirm_delete_current_book();
            None
        }
        KeyCode::Char('n') => {
            app.open_new_book_prompt();
            None
        }
        KeyCode::Char('L') => Some(UiIntent::Logout),
        _ => None,
    }
}

/// Apply an editing key to a single-line field.
fn edit_field(field: &mut InputField, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            field.insert_char(c)
        }
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete_char(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_url_is_normalizable() {
        let client = ApiClient::new(DEFAULT_SERVER_URL).unwrap();
        assert!(client.base_url().ends_with('/'));
    }
}
