mod api;
mod state;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use api::{ApiClient, ClientError};
use state::{Mode, NotesState, Submission};

const HELP: &str = "\
Commands:
  list               show all notes
  title <text>       set the form title
  content <text>     set the form content
  submit             create a note, or save the one being edited
  edit <id>          load a note into the form for editing
  cancel             leave edit mode and clear the form
  delete <id>        delete a note
  help               show this message
  quit               exit";

fn alert(err: &ClientError) {
    println!("! {err}");
}

fn render(state: &NotesState) {
    match state.mode() {
        Mode::Creating => println!("-- creating a new note --"),
        Mode::Editing { id } => println!("-- editing note {id} --"),
    }
    let form = state.form();
    println!("   title:   {}", form.title);
    println!("   content: {}\n", form.content);

    if state.notes().is_empty() {
        println!("(no notes)");
    }
    for note in state.notes() {
        println!("[{}] {}", note.id, note.title);
        if let Some(content) = note.content.as_deref().filter(|c| !c.is_empty()) {
            println!("    {content}");
        }
        if let Some(created_at) = note.created_at {
            println!("    {}", created_at.format("%Y-%m-%d %H:%M:%S"));
        }
    }
}

fn parse_id(arg: &str) -> Option<i64> {
    arg.trim().parse().ok()
}

async fn confirm(lines: &mut Lines<BufReader<Stdin>>) -> std::io::Result<bool> {
    println!("Are you sure? [y/N]");
    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

async fn submit(client: &ApiClient, state: &mut NotesState) -> Result<(), ClientError> {
    match state.submission()? {
        Submission::Create { title, content } => {
            let note = client.create(&title, &content).await?;
            state.apply_created(note);
        }
        Submission::Update { id, title, content } => {
            let note = client.update(id, &title, &content).await?;
            state.apply_updated(id, note);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log setup
    tracing_subscriber::fmt().init();

    let base_url = std::env::var("NOTES_API_BASE")
        .unwrap_or_else(|_| "http://localhost:8000/api".to_string());
    let client = ApiClient::new(&base_url);
    tracing::info!("Using notes API at {}", base_url);

    let mut state = match client.list().await {
        Ok(notes) => NotesState::new(notes),
        Err(e) => {
            alert(&e);
            NotesState::default()
        }
    };
    render(&state);
    println!("\n{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => continue,
            "list" => render(&state),
            "title" => state.set_title(arg),
            "content" => state.set_content(arg),
            "submit" => match submit(&client, &mut state).await {
                Ok(()) => render(&state),
                Err(e) => alert(&e),
            },
            "edit" => match parse_id(arg) {
                Some(id) if state.start_edit(id) => render(&state),
                _ => println!("! No note with id '{arg}'"),
            },
            "cancel" => {
                state.cancel();
                render(&state);
            }
            "delete" => {
                let Some(id) = parse_id(arg) else {
                    println!("! Usage: delete <id>");
                    continue;
                };
                if !confirm(&mut lines).await? {
                    continue;
                }
                match client.delete(id).await {
                    Ok(()) => {
                        state.apply_deleted(id);
                        render(&state);
                    }
                    Err(e) => alert(&e),
                }
            }
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("! Unknown command '{other}', type 'help'"),
        }
    }

    Ok(())
}
