//! Generation pipeline — prompt builder → completion client → idea parser.
//!
//! Ideas: one completion per request, parsed into `Idea` records.
//! Articles: one completion per idea, processed strictly one after another so a
//! batch never fans out against the provider's rate limits. A failing item is
//! turned into a placeholder article and the batch moves on.

use tracing::{info, warn};

use crate::generation::idea_parser::parse_ideas;
use crate::generation::prompt_builder::{
    build_article_prompt, build_idea_prompt, inspiration_text,
};
use crate::generation::prompts::{article_system, idea_system};
use crate::llm_client::{CompletionClient, LlmError, MODEL};
use crate::models::{GeneratedArticle, Idea, Style};
use crate::profiles::ProfileSet;

/// Output budget for one idea batch.
pub const IDEA_MAX_TOKENS: u32 = 4096;
/// Output budget for one article. Larger than the idea budget.
pub const ARTICLE_MAX_TOKENS: u32 = 8192;

/// Brainstorms up to `count` ideas in a single completion.
///
/// The result may hold fewer than `count` ideas when the model output is
/// short or partly malformed; no follow-up request is made.
pub async fn generate_ideas(
    llm: &dyn CompletionClient,
    profiles: &ProfileSet,
    style: Style,
    count: u32,
) -> Result<Vec<Idea>, LlmError> {
    let prompt = build_idea_prompt(profiles, style, count);

    info!("Generating {} ideas (style={})", count, style);
    let raw = llm
        .complete(&idea_system(), &prompt, MODEL, IDEA_MAX_TOKENS)
        .await?;

    let ideas = parse_ideas(&raw);
    if ideas.len() < count as usize {
        warn!(
            "Requested {} ideas but parsed {} from the model output",
            count,
            ideas.len()
        );
    }

    Ok(ideas)
}

/// Expands one idea into article text, returned verbatim.
pub async fn generate_article(
    llm: &dyn CompletionClient,
    idea: &Idea,
    profiles: &ProfileSet,
) -> Result<String, LlmError> {
    let inspiration = inspiration_text(profiles, idea.style);
    let prompt = build_article_prompt(idea, &profiles.primary, &inspiration);

    llm.complete(&article_system(), &prompt, MODEL, ARTICLE_MAX_TOKENS)
        .await
}

/// Expands each idea in order. Always returns one article per idea.
pub async fn generate_articles(
    llm: &dyn CompletionClient,
    ideas: &[Idea],
    profiles: &ProfileSet,
) -> Vec<GeneratedArticle> {
    let mut articles = Vec::with_capacity(ideas.len());

    for (i, idea) in ideas.iter().enumerate() {
        info!(
            "Generating article {}/{} for idea {} ({:?})",
            i + 1,
            ideas.len(),
            idea.id,
            idea.title
        );

        let content = match generate_article(llm, idea, profiles).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Article generation failed for idea {}: {e}", idea.id);
                format!("Error generating article: {e}")
            }
        };

        articles.push(GeneratedArticle {
            idea_id: idea.id.clone(),
            title: idea.title.clone(),
            content,
        });
    }

    articles
}
