//! Terminal rendering of the panels.
//!
//! Every function returns the text instead of printing it, so the shell and
//! the one-shot commands decide where it goes.

use std::fmt::Write;

use colored::Colorize;
use qa_api_client::UploadFile;

use crate::panels::{HealthCheckState, IndexPanel, QaState, SearchState};
use crate::uploader::UploaderState;

fn error_line(out: &mut String, msg: &str) {
    let _ = writeln!(out, "{} {msg}", "Error:".red().bold());
}

fn success_line(out: &mut String, label: &str, msg: &str) {
    let _ = writeln!(out, "{} {msg}", label.green().bold());
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title.bold().underline());
}

fn size_kb(file: &UploadFile) -> String {
    format!("{:.1} KB", file.size() as f64 / 1024.0)
}

/// `PDF`, `TXT`, ...: the part after the last dot, upper-cased.
pub fn document_type(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_uppercase()
}

/// Upload panel. `indexed_files` is the app-level list of indexed documents.
pub fn render_uploader(
    up: &UploaderState,
    indexed_files: &[String],
    health: &HealthCheckState,
) -> String {
    let mut out = String::new();
    heading(&mut out, "Upload documents");

    if up.ready_to_process {
        success_line(&mut out, "Selected and validated files:", "");
        for f in &up.selected_files {
            let _ = writeln!(out, "  - {} ({})", f.name, size_kb(f));
        }
        if up.uploading {
            let _ = writeln!(out, "Processing files and building the index...");
        } else {
            let _ = writeln!(
                out,
                "{}",
                "Type `process` to upload or `cancel` to drop the selection.".dimmed()
            );
        }
        if let Some(e) = &up.error {
            error_line(&mut out, e);
        }
    } else if indexed_files.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            "Select 3 to 10 .txt/.pdf files (max 10MB each) with `select <paths..>`.".dimmed()
        );
        if let Some(e) = &up.error {
            error_line(&mut out, e);
        }
        if let Some(s) = &up.success {
            success_line(&mut out, "Success:", s);
        }
        out.push_str(&render_health(health));
    } else {
        if let Some(s) = &up.success {
            success_line(&mut out, "Success:", s);
        }
        success_line(&mut out, "Indexed documents:", "");
        for name in indexed_files {
            let _ = writeln!(out, "  - {name}");
        }
        let _ = writeln!(
            out,
            "{}",
            "Type `clear` to start over with new documents.".dimmed()
        );
    }
    out
}

/// Keyword search panel.
pub fn render_search(s: &SearchState) -> String {
    let mut out = String::new();
    heading(&mut out, "Search documents");

    if let Some(e) = &s.error {
        error_line(&mut out, e);
    }
    if s.searching {
        let _ = writeln!(out, "Searching...");
        return out;
    }
    if !s.has_searched {
        return out;
    }
    let Some(results) = &s.results else {
        return out;
    };

    if results.results.is_empty() {
        let _ = writeln!(out, "No results found for \"{}\"", results.query.bold());
        let _ = writeln!(out, "Try other keywords or more general terms.");
        return out;
    }

    let _ = writeln!(out, "Results found ({})", results.results.len());
    for hit in &results.results {
        let _ = writeln!(
            out,
            "\n{}  {}",
            hit.document_name.cyan().bold(),
            format!("{}% relevance", hit.relevance_percent()).yellow()
        );
        let _ = writeln!(out, "  {}", hit.text);
    }
    out
}

/// Question/answer panel.
pub fn render_qa(qa: &QaState) -> String {
    let mut out = String::new();
    heading(&mut out, "Questions and answers");
    let _ = writeln!(out, "{}", format!("{} characters", qa.char_counter()).dimmed());

    if let Some(e) = &qa.error {
        error_line(&mut out, e);
    }
    if qa.asking {
        let _ = writeln!(out, "Analyzing documents and generating an answer...");
        return out;
    }
    let Some(resp) = &qa.response else {
        return out;
    };

    let _ = writeln!(out, "{} \"{}\"", "Question:".bold(), resp.question);
    let _ = writeln!(out, "{}\n{}", "Answer:".bold(), resp.answer);

    if !resp.citations.is_empty() {
        let _ = writeln!(out, "\n{}", "Sources:".bold());
        let _ = writeln!(out, "{}", "Use `cite <n>` to highlight a citation.".dimmed());
        for (i, c) in resp.citations.iter().enumerate() {
            let highlighted = qa.highlighted_citation == Some(i);
            let number = format!("#{}", i + 1);
            let header = format!("{} {}", number, c.document_name);
            if highlighted {
                let _ = writeln!(out, "{} {}", ">".yellow().bold(), header.yellow().bold());
                let _ = writeln!(out, "    \"{}\"", c.text.yellow());
            } else {
                let _ = writeln!(out, "  {}", header.cyan());
                let _ = writeln!(out, "    \"{}\"", c.text);
            }
        }
    }
    out
}

/// Indexed-documents panel.
pub fn render_index(panel: &IndexPanel) -> String {
    let mut out = String::new();
    heading(&mut out, "Indexed documents");

    if panel.loading {
        let _ = writeln!(out, "Loading information...");
        return out;
    }

    let info = match &panel.info {
        Some(info) if !info.is_empty() => info,
        _ => {
            let _ = writeln!(out, "No indexed documents");
            let _ = writeln!(out, "Upload at least 3 documents to get started");
            return out;
        }
    };

    let saved = if info.index_file_exists {
        "Saved".green()
    } else {
        "Not saved".red()
    };
    let bm25 = if info.has_bm25_index {
        "ready".green()
    } else {
        "missing".red()
    };
    let _ = writeln!(
        out,
        "Documents: {}   Chunks: {}   Status: {}   BM25 index: {}",
        info.documents_count.to_string().bold(),
        info.chunks_count.to_string().bold(),
        saved,
        bm25
    );

    if panel.expanded {
        let _ = writeln!(out, "\n{}", "Document list".bold());
        for name in &info.document_names {
            let _ = writeln!(out, "  - {name} [{}]", document_type(name));
        }
    } else {
        let _ = writeln!(out, "{}", "Type `toggle-info` to expand the list.".dimmed());
    }
    out
}

/// Connection-test messages.
pub fn render_health(h: &HealthCheckState) -> String {
    let mut out = String::new();
    if h.testing {
        let _ = writeln!(out, "Testing connection...");
    }
    if let Some(e) = &h.error {
        error_line(&mut out, e);
    }
    if let Some(s) = &h.success {
        success_line(&mut out, "Success:", s);
    }
    out
}

#[cfg(test)]
mod tests {
    use qa_api_client::{AskResponse, Citation, IndexInfo, SearchResponse, SearchResult};

    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn search_shows_percent_relevance() {
        plain();
        let s = SearchState {
            query: "rust".into(),
            results: Some(SearchResponse {
                query: "rust".into(),
                results: vec![SearchResult {
                    text: "Rust is a systems language".into(),
                    document_name: "lang.txt".into(),
                    relevance_score: 0.456,
                }],
                total_results: 1,
            }),
            searching: false,
            error: None,
            has_searched: true,
        };
        let text = render_search(&s);
        assert!(text.contains("Results found (1)"));
        assert!(text.contains("lang.txt  46% relevance"));
    }

    #[test]
    fn search_without_hits_quotes_query() {
        plain();
        let s = SearchState {
            query: "zebra".into(),
            results: Some(SearchResponse {
                query: "zebra".into(),
                results: vec![],
                total_results: 0,
            }),
            has_searched: true,
            ..SearchState::default()
        };
        assert!(render_search(&s).contains("No results found for \"zebra\""));
    }

    #[test]
    fn qa_numbers_and_marks_highlighted_citation() {
        plain();
        let qa = QaState {
            question: "why?".into(),
            response: Some(AskResponse {
                question: "why?".into(),
                answer: "Because.".into(),
                citations: vec![
                    Citation {
                        text: "first".into(),
                        document_name: "a.txt".into(),
                    },
                    Citation {
                        text: "second".into(),
                        document_name: "b.pdf".into(),
                    },
                ],
            }),
            highlighted_citation: Some(1),
            ..QaState::default()
        };
        let text = render_qa(&qa);
        assert!(text.contains("4/500 characters"));
        assert!(text.contains("  #1 a.txt"));
        assert!(text.contains("> #2 b.pdf"));
    }

    #[test]
    fn index_lists_types_when_expanded() {
        plain();
        let mut panel = IndexPanel::new();
        panel.info = Some(IndexInfo {
            documents_count: 2,
            chunks_count: 9,
            has_bm25_index: true,
            index_file_exists: false,
            document_names: vec!["paper.pdf".into(), "notes.txt".into()],
        });
        let text = render_index(&panel);
        assert!(text.contains("Not saved"));
        assert!(text.contains("paper.pdf [PDF]"));
        assert!(text.contains("notes.txt [TXT]"));

        panel.toggle_expanded();
        assert!(!render_index(&panel).contains("paper.pdf"));
    }

    #[test]
    fn empty_index_state() {
        plain();
        let text = render_index(&IndexPanel::new());
        assert!(text.contains("No indexed documents"));
    }

    #[test]
    fn uploader_lists_selection_with_kb() {
        plain();
        let mut up = UploaderState::new();
        up.handle_files(vec![
            UploadFile::new("a.txt", Some("text/plain".into()), vec![b'a'; 2048]),
            UploadFile::new("b.txt", Some("text/plain".into()), vec![b'b'; 10]),
            UploadFile::new("c.pdf", Some("application/pdf".into()), vec![b'c'; 1536]),
        ]);
        let text = render_uploader(&up, &[], &HealthCheckState::new());
        assert!(text.contains("a.txt (2.0 KB)"));
        assert!(text.contains("c.pdf (1.5 KB)"));
    }
}
