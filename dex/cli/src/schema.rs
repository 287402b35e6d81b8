use {
    clap::Subcommand,
    colored::Colorize,
    dex_schema::{BulkError, CreatedTable, DexTable, SchemaErrorKind, SchemaManager},
    sea_orm::DbErr,
    strum::IntoEnumIterator,
};

#[derive(Subcommand)]
pub enum SchemaCmd {
    /// Create a table and its indices
    Create {
        /// Token, Pair, Swap, Log, Block or Transaction (case insensitive)
        table: DexTable,
    },
    /// Create every table
    CreateAll,
    /// Drop a table by name, if it exists
    Drop {
        name: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Drop every table
    DropAll {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show which tables exist
    Status,
}

impl SchemaCmd {
    pub async fn run(self, manager: SchemaManager) -> anyhow::Result<()> {
        match self {
            SchemaCmd::Create { table } => match manager.create_table(table).await {
                Ok(created) => {
                    print_created(&created);
                },
                Err(err) => {
                    print_failure(table, SchemaErrorKind::of(&err), &err);

                    return Err(err.into());
                },
            },
            SchemaCmd::CreateAll => match manager.create_all_tables().await {
                Ok(created) => {
                    for table in &created {
                        print_created(table);
                    }
                },
                Err(err) => {
                    print_failures(&err);

                    return Err(err.into());
                },
            },
            SchemaCmd::Drop { name, yes } => {
                if !yes
                    && !confirm(
                        format!("Confirm dropping table {name:?}? All its rows will be lost.")
                            .bold()
                            .to_string(),
                    )?
                {
                    println!("Aborted");
                    return Ok(());
                }

                manager.drop_table(&name).await?;

                println!("{} {name}", "Dropped".green().bold());
            },
            SchemaCmd::DropAll { yes } => {
                if !yes
                    && !confirm(
                        "Confirm dropping every indexer table? This operation is irreversible."
                            .bold()
                            .to_string(),
                    )?
                {
                    println!("Aborted");
                    return Ok(());
                }

                if let Err(err) = manager.drop_all_tables().await {
                    print_failures(&err);

                    return Err(err.into());
                }

                println!("{} every table", "Dropped".green().bold());
            },
            SchemaCmd::Status => {
                println!("Log layout: {}", manager.log_schema());

                for table in DexTable::iter() {
                    let state = if manager.has_table(table.name()).await? {
                        "present".green()
                    } else {
                        "absent".dimmed()
                    };

                    println!("{:<12} {state}", table.name());
                }
            },
        }

        Ok(())
    }
}

fn print_created(table: &CreatedTable) {
    println!(
        "{} {} ({} columns, {} indices)",
        "Created".green().bold(),
        table.name,
        table.columns.len(),
        table.indexes.len()
    );
}

fn print_failure(table: DexTable, kind: SchemaErrorKind, error: &DbErr) {
    println!("{} {table} [{kind}]: {error}", "Failed".red().bold());
}

fn print_failures(err: &BulkError) {
    for failure in err.failures() {
        print_failure(failure.table, failure.kind(), &failure.error);
    }
}

fn confirm<T>(prompt: T) -> dialoguer::Result<bool>
where
    T: Into<String>,
{
    dialoguer::Confirm::new().with_prompt(prompt).interact()
}
