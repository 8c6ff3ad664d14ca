//! Interactive main menu
//!
//! The menu is driven by an explicit table of [`MenuAction`]s. Each pass
//! prints the table, reads one command and either runs the matching action,
//! quits, or complains.

use std::path::PathBuf;

use chrono::Local;
use miette::{IntoDiagnostic, Result};

use crate::cli::console::Console;
use crate::cli::prompts::{collect_entry, confirm_save};
use crate::cli::viewer::view_entries;
use crate::core::backup::{backup, BackupMode};
use crate::core::store::Inventory;

pub const QUIT_KEY: &str = "q";
pub const MENU_PROMPT: &str = "Action: ";

/// Actions reachable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    View,
    Add,
    Backup,
}

impl MenuAction {
    /// The default command table, in display order
    pub const ALL: [MenuAction; 3] = [MenuAction::View, MenuAction::Add, MenuAction::Backup];

    pub fn key(&self) -> &'static str {
        match self {
            MenuAction::View => "v",
            MenuAction::Add => "a",
            MenuAction::Backup => "b",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuAction::View => "View Entries",
            MenuAction::Add => "Add Entry",
            MenuAction::Backup => "Backup Database",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

/// Everything the menu actions operate on
pub struct MenuContext<'a> {
    pub store: &'a mut Inventory,
    pub backup_path: PathBuf,
    pub backup_mode: BackupMode,
}

/// Run the menu until the user quits or input runs out
pub fn run_menu<C: Console + ?Sized>(
    console: &mut C,
    ctx: &mut MenuContext<'_>,
    actions: &[MenuAction],
) -> Result<()> {
    let mut state = MenuState::Running;
    while state == MenuState::Running {
        state = step(console, ctx, actions)?;
    }
    Ok(())
}

/// One pass through the menu
pub fn step<C: Console + ?Sized>(
    console: &mut C,
    ctx: &mut MenuContext<'_>,
    actions: &[MenuAction],
) -> Result<MenuState> {
    console.print_line("Enter 'q' to quit").into_diagnostic()?;
    for action in actions {
        console
            .print_line(&format!("{}, {}.", action.key(), action.description()))
            .into_diagnostic()?;
    }

    let choice = match console.read_line(MENU_PROMPT).into_diagnostic()? {
        Some(line) => line.trim().to_lowercase(),
        None => QUIT_KEY.to_string(),
    };

    if choice == QUIT_KEY {
        console.print_line("Goodbye").into_diagnostic()?;
        return Ok(MenuState::Terminated);
    }

    match actions.iter().find(|action| action.key() == choice) {
        Some(action) => {
            console.clear().into_diagnostic()?;
            dispatch(console, ctx, *action)?;
        }
        None => console
            .print_line("Sorry that is not a valid choice!")
            .into_diagnostic()?,
    }

    Ok(MenuState::Running)
}

fn dispatch<C: Console + ?Sized>(
    console: &mut C,
    ctx: &mut MenuContext<'_>,
    action: MenuAction,
) -> Result<()> {
    match action {
        MenuAction::View => view_entries(console, &*ctx.store),
        MenuAction::Add => add_entry(console, ctx.store),
        MenuAction::Backup => backup_database(console, ctx),
    }
}

/// Collect a product and save it under today's date
pub fn add_entry<C: Console + ?Sized>(console: &mut C, store: &mut Inventory) -> Result<()> {
    let Some(entry) = collect_entry(console).into_diagnostic()? else {
        return Ok(());
    };

    if !confirm_save(console).into_diagnostic()? {
        return Ok(());
    }

    let today = Local::now().date_naive();
    store.upsert(&entry.name, entry.price, entry.quantity, today)?;

    console.clear().into_diagnostic()?;
    console.print_line("Saved Successfully!").into_diagnostic()
}

/// Write the backup file and report how it went
pub fn backup_database<C: Console + ?Sized>(
    console: &mut C,
    ctx: &MenuContext<'_>,
) -> Result<()> {
    let message = match backup(&*ctx.store, &ctx.backup_path, ctx.backup_mode) {
        Ok(_) => "Backup successfully completed.",
        Err(e) => {
            tracing::warn!(path = %ctx.backup_path.display(), error = %e, "backup failed");
            "Something went wrong, Please try again."
        }
    };

    console.clear().into_diagnostic()?;
    console.print_line(message).into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::console::testing::ScriptedConsole;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn run_script(store: &mut Inventory, backup_path: PathBuf, inputs: &[&str]) -> ScriptedConsole {
        let mut console = ScriptedConsole::new(inputs);
        let mut ctx = MenuContext {
            store,
            backup_path,
            backup_mode: BackupMode::Append,
        };
        run_menu(&mut console, &mut ctx, &MenuAction::ALL).unwrap();
        console
    }

    #[test]
    fn test_menu_lists_actions_and_quits() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();

        let console = run_script(&mut store, tmp.path().join("Backup.csv"), &["  Q "]);

        assert_eq!(
            console.output,
            "Enter 'q' to quit\nv, View Entries.\na, Add Entry.\nb, Backup Database.\nGoodbye\n"
        );
        assert_eq!(console.clears, 0);
    }

    #[test]
    fn test_invalid_choice_keeps_running() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();

        let console = run_script(&mut store, tmp.path().join("Backup.csv"), &["x", "q"]);

        assert!(console.output.contains("Sorry that is not a valid choice!"));
        assert_eq!(console.output.matches("Enter 'q' to quit").count(), 2);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();

        let console = run_script(&mut store, tmp.path().join("Backup.csv"), &[]);
        assert!(console.output.ends_with("Goodbye\n"));
    }

    #[test]
    fn test_step_reports_state() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();
        let mut ctx = MenuContext {
            store: &mut store,
            backup_path: tmp.path().join("Backup.csv"),
            backup_mode: BackupMode::Append,
        };

        let mut console = ScriptedConsole::new(&["z", "q"]);
        assert_eq!(
            step(&mut console, &mut ctx, &MenuAction::ALL).unwrap(),
            MenuState::Running
        );
        assert_eq!(
            step(&mut console, &mut ctx, &MenuAction::ALL).unwrap(),
            MenuState::Terminated
        );
    }

    #[test]
    fn test_custom_action_table() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();
        let mut ctx = MenuContext {
            store: &mut store,
            backup_path: tmp.path().join("Backup.csv"),
            backup_mode: BackupMode::Append,
        };

        let mut console = ScriptedConsole::new(&["b", "q"]);
        run_menu(&mut console, &mut ctx, &[MenuAction::View]).unwrap();

        assert!(!console.output.contains("b, Backup Database."));
        assert!(console.output.contains("Sorry that is not a valid choice!"));
        assert!(!tmp.path().join("Backup.csv").exists());
    }

    #[test]
    fn test_add_then_update_same_record() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();

        let console = run_script(
            &mut store,
            tmp.path().join("Backup.csv"),
            &["a", "Gadget", "9.99", "3", "", "A", "Gadget", "4.50", "3", "y", "q"],
        );
        assert_eq!(console.output.matches("Saved Successfully!").count(), 2);

        assert_eq!(store.count().unwrap(), 1);
        let gadget = store.get_by_name("Gadget").unwrap().unwrap();
        assert_eq!(gadget.id, 1);
        assert_eq!(gadget.price, 450);
        assert_eq!(gadget.quantity, 3);
        assert_eq!(gadget.last_updated, Local::now().date_naive());
    }

    #[test]
    fn test_add_matches_import_upsert() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();
        let (imported, _) = store
            .upsert("Widget", 1250, 5, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())
            .unwrap();

        run_script(
            &mut store,
            tmp.path().join("Backup.csv"),
            &["a", "Widget", "1", "9", "", "q"],
        );

        let widget = store.get_by_name("Widget").unwrap().unwrap();
        assert_eq!(widget.id, imported.id);
        assert_eq!(widget.price, 100);
        assert_eq!(widget.quantity, 9);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_declined_save_is_silent() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();

        let console = run_script(
            &mut store,
            tmp.path().join("Backup.csv"),
            &["a", "Gadget", "9.99", "3", "n", "q"],
        );

        assert!(!console.output.contains("Saved Successfully!"));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_backup_action() {
        let tmp = tempdir().unwrap();
        let backup_path = tmp.path().join("Backup.csv");
        let mut store = Inventory::open_in_memory().unwrap();
        store
            .upsert("Widget", 1250, 5, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())
            .unwrap();

        let console = run_script(&mut store, backup_path.clone(), &["B", "q"]);

        assert!(console.output.contains("Backup successfully completed."));
        let contents = fs::read_to_string(&backup_path).unwrap();
        assert!(contents.contains("Widget,1250,5,2020-01-02"));
    }

    #[test]
    fn test_backup_failure_is_reported_not_fatal() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();

        let console = run_script(
            &mut store,
            tmp.path().join("no/such/dir/Backup.csv"),
            &["b", "q"],
        );

        assert!(console.output.contains("Something went wrong, Please try again."));
        assert!(console.output.ends_with("Goodbye\n"));
    }

    #[test]
    fn test_view_from_menu() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();
        store
            .upsert("Widget", 1250, 5, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())
            .unwrap();

        let console = run_script(&mut store, tmp.path().join("Backup.csv"), &["v", "1", "r", "q"]);

        assert!(console.output.contains("$12.5\n"));
        assert!(console.output.contains("Date: 01/02/2020\n"));
    }
}
