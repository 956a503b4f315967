use clap::{Subcommand, ValueEnum};

/// How a feature result is printed and saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The `{"success": ..}` envelope
    #[default]
    Json,
    /// Just the generated text
    Text,
}

/// Text arguments accept `-` to read from stdin.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a story from a genre, character and setting
    Story {
        genre: String,

        #[arg(short, long)]
        character: String,

        #[arg(short, long)]
        setting: String,

        #[arg(long)]
        sub_genre: Option<String>,

        /// Extra instructions appended to the prompt
        #[arg(short, long)]
        details: Option<String>,

        #[arg(long, default_value = "short_story")]
        story_format: String,

        #[arg(long, default_value = "third_person")]
        narrative_style: String,

        #[arg(short, long, default_value = "english")]
        language: String,

        /// 0-100; below 50 is darker, 50 and above lighter
        #[arg(short, long, default_value = "50", value_parser = clap::value_parser!(u8).range(0..=100))]
        mood: u8,
    },

    /// Continue an existing story
    ExpandStory {
        story: String,

        #[arg(short, long, default_value = "english")]
        language: String,
    },

    /// Write a poem
    Poetry {
        genre: String,

        #[arg(long)]
        style: Option<String>,

        /// Poet whose voice to imitate
        #[arg(long)]
        poet: Option<String>,

        #[arg(short = 'n', long, default_value = "14")]
        lines: u32,

        #[arg(short, long, default_value = "50", value_parser = clap::value_parser!(u8).range(0..=100))]
        mood: u8,

        #[arg(short, long, default_value = "english")]
        language: String,
    },

    /// Ask AI Thakuma for a new tale
    Thakuma,

    /// Continue a Thakuma tale with a listener's question
    ContinueThakuma { story: String, question: String },

    /// Play one turn of an interactive story
    Roleplay {
        input: String,

        /// Continue an existing story instead of starting one
        #[arg(long = "continue")]
        continue_story: bool,

        /// Transcript of the story so far
        #[arg(long)]
        context: Option<String>,
    },

    /// Check grammar, spelling and style
    Grammar {
        content: String,

        #[arg(short, long, default_value = "casual")]
        style: String,
    },

    /// Get writing-coach advice
    Advice { content: String },

    /// Enhance a piece of writing
    Enhance {
        content: String,

        #[arg(short, long, default_value = "story", value_parser = ["story", "poem", "screenplay", "play"])]
        kind: String,

        #[arg(short, long, default_value = "english", value_parser = ["english", "bengali"])]
        language: String,
    },

    /// Paraphrase a sentence or text
    Paraphrase { text: String },

    /// Explain, summarize or criticize a poem or story
    Analyze {
        content: String,

        #[arg(short, long, default_value = "explain", value_parser = ["explain", "summarize", "criticize"])]
        mode: String,

        #[arg(short, long, default_value = "poem", value_parser = ["poem", "story"])]
        kind: String,
    },

    /// Explain a philosophical concept or quote
    Philosophy {
        #[arg(long, conflicts_with = "quote")]
        concept: Option<String>,

        #[arg(long, requires = "concept")]
        philosopher: Option<String>,

        #[arg(long)]
        quote: Option<String>,
    },

    /// Review a book
    Review { title: String },

    /// Suggest five books for a mood or query
    Books {
        #[arg(short, long)]
        mood: Option<String>,

        #[arg(short, long)]
        query: Option<String>,
    },

    /// Draft an email with subject and body
    Email {
        purpose: String,

        #[arg(short, long, default_value = "formal")]
        kind: String,

        #[arg(short, long)]
        details: Option<String>,
    },

    /// Generate social media content
    Social {
        prompt: String,

        #[arg(short, long, default_value = "post")]
        kind: String,

        #[arg(short, long, default_value = "friendly")]
        tone: String,
    },

    /// Generate a scientific article
    Article {
        topic: String,

        /// Scientific field, e.g. biology
        #[arg(long)]
        field: String,

        #[arg(short, long, default_value = "medium", value_parser = ["short", "medium", "long"])]
        length: String,

        #[arg(short, long, default_value = "academic")]
        tone: String,

        #[arg(short, long)]
        keywords: Option<String>,

        #[arg(long)]
        suggestions: Option<String>,
    },

    /// Expand and improve an existing scientific article
    ExpandArticle {
        article: String,

        #[arg(long)]
        suggestions: Option<String>,
    },

    /// Start the HTTP server exposing every feature under /api
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
