use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Note title (defaults to the vault's default title)
    pub title: Option<String>,

    /// Tag to attach (repeatable)
    #[arg(long, short)]
    pub tag: Vec<String>,

    /// Initial body text
    #[arg(long, short)]
    pub body: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Note id, `#id`, or title
    pub note: String,

    /// Replace the body
    #[arg(long, conflicts_with = "append")]
    pub body: Option<String>,

    /// Append a line to the body
    #[arg(long)]
    pub append: Option<String>,

    /// Replace all tags (repeatable)
    #[arg(long, short, conflicts_with_all = ["add_tag", "remove_tag"])]
    pub tag: Vec<String>,

    /// Add a tag (repeatable)
    #[arg(long)]
    pub add_tag: Vec<String>,

    /// Remove a tag (repeatable)
    #[arg(long)]
    pub remove_tag: Vec<String>,
}

impl EditArgs {
    pub fn changes_tags(&self) -> bool {
        !self.tag.is_empty() || !self.add_tag.is_empty() || !self.remove_tag.is_empty()
    }
}
