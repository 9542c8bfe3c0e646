//! Terminal rendering of corrections and explanations.

use colored::{Color, Colorize};

use glossa::annotation::{compose, repair, AnnotationKind, RepairedAnnotation, Segment, Sentence};
use glossa::diff::diff_words;
use glossa::llm::{CorrectionResult, ExplanationResult};

/// Highlight color for an annotation kind.
pub fn kind_color(kind: AnnotationKind) -> Color {
    match kind {
        AnnotationKind::Vocabulary => Color::Yellow,
        AnnotationKind::Grammar => Color::Blue,
        AnnotationKind::Idiom => Color::Green,
        AnnotationKind::Structure => Color::Magenta,
    }
}

/// Render a correction: word diff, then the analysis sections.
pub fn render_correction(original: &str, result: &CorrectionResult) {
    println!(
        "{} ({})",
        "Correction".cyan().bold(),
        result.detected_language.label()
    );
    println!();

    for part in diff_words(original, &result.corrected) {
        if part.removed {
            print!("{}", part.value.red().strikethrough());
        } else if part.added {
            print!("{}", part.value.green().bold());
        } else {
            print!("{}", part.value);
        }
    }
    println!();
    println!();

    println!("{}", "Mistakes".cyan().bold());
    println!("{}", result.mistakes);
    println!();
    println!("{}", "Knowledge".cyan().bold());
    println!("{}", result.knowledge);
}

/// Render a whole explanation result, sentence by sentence.
pub fn render_explanation(result: &ExplanationResult) {
    println!(
        "{} ({})",
        "Explanation".cyan().bold(),
        result.detected_language.label()
    );

    for sentence in &result.sentences {
        println!();
        let repaired = repair(&sentence.text, &sentence.annotations);
        let segments = compose(&sentence.text, &repaired);

        render_segments(&segments);
        println!();

        for ann in segments.iter().filter_map(Segment::annotation) {
            render_annotation_detail(ann);
        }
        render_sentence_extras(sentence);
    }
}

/// Print the segment sequence as one highlighted line.
///
/// Annotated runs are colored by kind and tagged with their identity so
/// the user can refer to them in interactive mode.
pub fn render_segments(segments: &[Segment]) {
    for segment in segments {
        match segment {
            Segment::Plain { text } => print!("{}", text),
            Segment::Annotated { text, annotation } => {
                print!(
                    "{}{}",
                    text.color(kind_color(annotation.kind)).underline(),
                    format!("[{}]", annotation.identity).dimmed()
                );
            }
        }
    }
}

/// Print the expanded detail block for one annotation.
pub fn render_annotation_detail(ann: &RepairedAnnotation) {
    println!(
        "  {} {} {}",
        ann.kind.icon(),
        format!("\"{}\"", ann.text).bold(),
        ann.kind.label().color(kind_color(ann.kind))
    );
    println!("    {}", ann.explanation);
    for example in &ann.examples {
        println!("    {} {}", "-".dimmed(), example.italic());
    }
}

/// Print the simplified expression and teacher comment, when present.
pub fn render_sentence_extras(sentence: &Sentence) {
    if let Some(simplified) = &sentence.simplified_expression {
        println!("  {} {}", "Simpler:".dimmed(), simplified.italic());
    }
    if let Some(comment) = &sentence.teacher_comment {
        println!("  {} {}", "Teacher:".dimmed(), comment);
    }
}
