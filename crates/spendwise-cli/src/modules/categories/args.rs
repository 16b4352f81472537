use clap::{Args, Subcommand};

#[derive(Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    List,
    Get(CategoryIdArgs),
    Create(CategoryWriteArgs),
    Update(CategoryUpdateArgs),
    Delete(CategoryIdArgs),
}

#[derive(Args)]
pub struct CategoryIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct CategoryWriteArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct CategoryUpdateArgs {
    pub id: i64,
    #[command(flatten)]
    pub fields: CategoryWriteArgs,
}
