use clap::{Args, Subcommand};

/// Exam commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ExamCommands {
    /// List exams visible to the current role.
    List {
        /// Match title or subject, ignoring case.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        /// easy, medium or hard.
        #[arg(long)]
        difficulty: Option<String>,
        /// Only featured exams.
        #[arg(long)]
        featured: bool,
        /// Only exams dated in this month (YYYY-MM).
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
    },
    /// Get an exam by ID.
    Get { id: String },
    /// List the distinct subjects of visible exams.
    Subjects,
    /// Create an exam.
    Create(ExamFormArgs),
    /// Edit an existing exam. Only the given fields change.
    Update {
        id: String,
        #[command(flatten)]
        form: ExamFormArgs,
    },
    /// Delete an exam.
    Delete {
        id: String,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Flip an exam between active and inactive.
    ToggleStatus { id: String },
}

/// Fields of the exam form. Positions passed to the `--drop-*` and
/// `--*-topics` flags are 1-based and refer to the list before any change.
#[derive(Clone, Debug, Default, Args)]
pub struct ExamFormArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    /// Exam date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,
    /// Free-form duration, e.g. "2 hours".
    #[arg(long)]
    pub duration: Option<String>,
    /// easy, medium or hard.
    #[arg(long)]
    pub difficulty: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    /// active or inactive.
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub featured: Option<bool>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub registration_deadline: Option<String>,
    #[arg(long)]
    pub eligibility: Option<String>,
    #[arg(long)]
    pub fee: Option<String>,
    #[arg(long)]
    pub location: Option<String>,

    /// Add a syllabus section (repeatable).
    #[arg(long = "section", value_name = "TITLE: TOPIC, TOPIC")]
    pub sections: Vec<String>,
    /// Replace the topics of an existing section.
    #[arg(long = "section-topics", value_name = "N=TOPIC, TOPIC")]
    pub section_topics: Vec<String>,
    /// Remove the section at position N (repeatable).
    #[arg(long = "drop-section", value_name = "N")]
    pub drop_sections: Vec<usize>,

    /// Add a resource group (repeatable).
    #[arg(long = "resource", value_name = "TITLE: ITEM, ITEM")]
    pub resources: Vec<String>,
    /// Replace the items of an existing resource group.
    #[arg(long = "resource-items", value_name = "N=ITEM, ITEM")]
    pub resource_items: Vec<String>,
    /// Remove the resource group at position N (repeatable).
    #[arg(long = "drop-resource", value_name = "N")]
    pub drop_resources: Vec<usize>,

    /// Add an FAQ entry (repeatable).
    #[arg(long = "faq", value_name = "QUESTION|ANSWER")]
    pub faqs: Vec<String>,
    /// Remove the FAQ entry at position N (repeatable).
    #[arg(long = "drop-faq", value_name = "N")]
    pub drop_faqs: Vec<usize>,
}
