mod highlighter;
mod lexer;
mod validator;

use std::borrow::Cow;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use lispy::{Builtin, EvaluatorOptions, Lispy, reader, render_error};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultCompleter, DescriptionMode, EditCommand, Emacs, FileBackedHistory, IdeMenu, KeyCode,
    KeyModifiers, Keybindings, MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, ReedlineEvent, ReedlineMenu, Signal,
    default_emacs_keybindings,
};
use tracing::debug;

use crate::highlighter::Highlighter;
use crate::validator::BracketValidator;

const HISTORY_SIZE: usize = 1000;

/// Lispy - a small Lisp with S-expressions and Q-expressions
#[derive(Parser, Debug)]
#[command(name = "lispy")]
#[command(about = "Evaluate Lispy expressions", long_about = None)]
struct Args {
    /// Print the parse tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Print the value read from the parse tree, before evaluation (for debugging)
    #[arg(long)]
    debug_read: bool,

    /// Maximum evaluation depth
    #[arg(long, default_value_t = EvaluatorOptions::default().max_depth)]
    max_depth: usize,

    /// Do not load or save REPL history
    #[arg(long)]
    no_history: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

struct LispyPrompt;

impl Prompt for LispyPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("lispy")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("....> ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("lispy").join("history.txt"))
}

fn setup_reedline(use_history: bool) -> Result<Reedline> {
    let commands: Vec<String> = Builtin::ALL
        .iter()
        .map(|builtin| builtin.name().to_string())
        .collect();

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['-', '_']);
        completions.insert(commands);
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_validator(Box::new(BracketValidator))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(edit_mode);

    if use_history {
        if let Some(path) = history_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).into_diagnostic()?;
            }
            debug!(path = %path.display(), "using history file");
            let history = FileBackedHistory::with_file(HISTORY_SIZE, path).into_diagnostic()?;
            line_editor = line_editor.with_history(Box::new(history));
        }
    }

    Ok(line_editor)
}

fn interpret_input(lispy: &Lispy, input: &str, debug_parse: bool, debug_read: bool) {
    // Parse
    let tree = match lispy.parse(input) {
        Ok(tree) => tree,
        Err(e) => {
            render_error(&e);
            return;
        }
    };

    if debug_parse {
        println!("=== Parse Tree ===");
        print!("{}", tree);
        println!();
    }

    // Read
    let value = reader::read(&tree);

    if debug_read {
        println!("=== Read Value ===");
        println!("{}", value);
        println!();
    }

    // Evaluate
    println!("{}", lispy.eval(value));
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let lispy = Lispy::new(EvaluatorOptions {
        max_depth: args.max_depth,
    });

    // Check if we have a direct expression argument
    if let Some(expr) = args.expression {
        interpret_input(&lispy, &expr, args.debug_parse, args.debug_read);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let mut line_editor = setup_reedline(!args.no_history)?;
        let prompt = LispyPrompt;

        println!("Lispy Version 0.0.0.0.1");
        println!("Press Ctrl+c to Exit\n");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    if buffer.trim().is_empty() {
                        continue;
                    }
                    interpret_input(&lispy, &buffer, args.debug_parse, args.debug_read);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            interpret_input(&lispy, &line, args.debug_parse, args.debug_read);
        }
    }

    Ok(())
}
