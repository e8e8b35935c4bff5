//! Prompt templates for the two pipeline stages.
//!
//! Both builders are pure string interpolation: user text is inserted
//! literally, never interpreted.

/// Example block whose CSS classes form the only styling vocabulary the
/// generation stage is allowed to use.
pub const HTML_EXAMPLE: &str = r#"<div
    class="p-4 border border-green-500 text-green-500 bg-black font-mono mt-6 mb-6 shadow-[0_0_10px_2px_rgba(0,255,0,0.5)] crt-spawn">
    <h2 class="text-xl font-bold mb-2">Block Title</h2>
    <p>Data Line 1: <span class="font-bold">Value 1</span></p>
    <p>Data Line 2: <span class="font-bold">Value 2</span></p>
    <p>Data Line 3: <span class="font-bold">Value 3</span></p>
</div>"#;

/// First line of every classification prompt. User text only ever appears
/// after it, so it identifies the stage.
pub const CLASSIFICATION_HEADER: &str = "You are a metadata inference engine.";

/// Prompt for the classification stage. Topic names appear in the order given.
pub fn build_classification_prompt<S: AsRef<str>>(query: &str, topic_names: &[S]) -> String {
    let known_topics = topic_names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "
{CLASSIFICATION_HEADER} The user has provided a query about some website content. \
The website has various topics like \"topicA\", \"topicB\", etc.
Your job is to identify which topic from the known topics is most relevant to the user's query.
Known topics: {known_topics}

User query: \"{query}\"

Based on the known topics, respond with exactly one topic name from the list.
If you are unsure, pick the closest relevant topic.
"
    )
}

/// Prompt for the generation stage. `topic_data` is the serialized dataset entry.
pub fn build_generation_prompt(topic: &str, topic_data: &str, query: &str) -> String {
    format!(
        "
You are a web content generator. The user wants a structured HTML snippet related to the topic identified: \"{topic}\".
Follow these rules:
- The result should be an HTML snippet with proper tags.
- Include headings, paragraphs, and possibly lists based on the dataset content.
- Make sure the structure is semantic and user-friendly.
- Adapt the dataset into a user-friendly presentation. The user query is context: \"{query}\"

Dataset to include for the topic \"{topic}\":
```json
{topic_data}
```

Produce a clean HTML structure. For example:
{HTML_EXAMPLE}

Now generate the requested HTML using the dataset above.

Rules:
Only return the HTML text
Do not markdown
Do not include ```html or other markdown tags
use the css style given in the example, do not use other styles unless instructed
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_prompt_lists_topics_in_order() {
        let prompt = build_classification_prompt("tell me about go", &["python", "golang", "blog"]);
        assert!(prompt.contains("Known topics: python, golang, blog\n"));
        assert!(prompt.contains("User query: \"tell me about go\""));
    }

    #[test]
    fn classification_prompt_accepts_empty_and_template_like_queries() {
        let empty = build_classification_prompt::<&str>("", &[]);
        assert!(empty.contains("Known topics: \n"));
        assert!(empty.contains("User query: \"\""));

        let tricky = build_classification_prompt("${query} {known_topics} {}", &["a"]);
        assert!(tricky.contains("User query: \"${query} {known_topics} {}\""));
    }

    #[test]
    fn generation_prompt_embeds_inputs_and_output_contract() {
        let prompt = build_generation_prompt("python", "\"Python content\"", "what is python?");

        assert!(prompt.contains("topic identified: \"python\""));
        assert!(prompt.contains("```json\n\"Python content\"\n```"));
        assert!(prompt.contains("The user query is context: \"what is python?\""));
        assert!(prompt.contains(HTML_EXAMPLE));
        assert!(prompt.contains("Only return the HTML text"));
        assert!(prompt.contains("Do not include ```html or other markdown tags"));
    }

    #[test]
    fn only_classification_prompt_opens_with_header() {
        let classify = build_classification_prompt("q", &["a"]);
        assert!(classify.trim_start().starts_with(CLASSIFICATION_HEADER));

        let generate = build_generation_prompt("a", "{}", CLASSIFICATION_HEADER);
        assert!(!generate.trim_start().starts_with(CLASSIFICATION_HEADER));
    }

    #[test]
    fn generation_prompt_is_deterministic() {
        let a = build_generation_prompt("blog", "{}", "q");
        let b = build_generation_prompt("blog", "{}", "q");
        assert_eq!(a, b);
    }
}
