use super::{SentimentResult, SentimentScorer};
use crate::extract::ExtractedContent;

/// The five strings scored for every page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextGroups {
    pub title: String,
    pub meta_description: String,
    /// h1, h2 then h3 texts joined by single spaces
    pub headings: String,
    /// Paragraph texts joined by single spaces
    pub paragraphs: String,
    /// The four groups above joined by single spaces
    pub full_page: String,
}

impl TextGroups {
    /// Derives the groups from extracted content
    ///
    /// `full_page` is assembled from the already-joined groups, not from the
    /// raw document, so empty groups still contribute their separator.
    pub fn from_content(content: &ExtractedContent) -> Self {
        let headings = content.headings().collect::<Vec<_>>().join(" ");
        let paragraphs = content.paragraphs.join(" ");
        let full_page = [
            content.title.as_str(),
            content.meta_description.as_str(),
            headings.as_str(),
            paragraphs.as_str(),
        ]
        .join(" ");

        Self {
            title: content.title.clone(),
            meta_description: content.meta_description.clone(),
            headings,
            paragraphs,
            full_page,
        }
    }
}

/// Sentiment results for all five groups of a page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentReport {
    pub title: SentimentResult,
    pub meta_description: SentimentResult,
    pub headings: SentimentResult,
    pub paragraphs: SentimentResult,
    pub overall: SentimentResult,
}

impl SentimentReport {
    /// Display name and result for each group, in report order
    pub fn entries(&self) -> [(&'static str, &SentimentResult); 5] {
        [
            ("Title", &self.title),
            ("Meta description", &self.meta_description),
            ("Headings", &self.headings),
            ("Paragraphs", &self.paragraphs),
            ("Overall page", &self.overall),
        ]
    }
}

/// Scores every group once, in report order
pub fn analyze<S: SentimentScorer + ?Sized>(scorer: &S, groups: &TextGroups) -> SentimentReport {
    SentimentReport {
        title: scorer.score(&groups.title),
        meta_description: scorer.score(&groups.meta_description),
        headings: scorer.score(&groups.headings),
        paragraphs: scorer.score(&groups.paragraphs),
        overall: scorer.score(&groups.full_page),
    }
}
