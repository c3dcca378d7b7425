#[cfg(test)]
pub mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    use crate::models::domain::{Mcq, Quiz};

    /// Creates a standard four-option question whose answer is the first
    /// option.
    pub fn test_mcq(question: &str) -> Mcq {
        Mcq {
            question: question.to_string(),
            options: vec![
                "alpha".to_string(),
                "beta".to_string(),
                "gamma".to_string(),
                "delta".to_string(),
            ],
            answer: "alpha".to_string(),
        }
    }

    /// Creates a quiz with `count` generated questions.
    pub fn test_quiz(count: usize) -> Quiz {
        Quiz::new((0..count).map(|i| test_mcq(&format!("Question {}?", i))).collect())
    }

    /// Builds an in-memory PDF with one page per entry in `pages`, each
    /// carrying its text in a plain Tj operation.
    pub fn sample_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for page_text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![50.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("content should encode"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).expect("pdf should serialize");
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_mcq_is_valid() {
        let mcq = test_mcq("Sample?");
        assert!(mcq.is_valid());
        assert_eq!(mcq.options.len(), 4);
    }

    #[test]
    fn test_fixtures_test_quiz() {
        let quiz = test_quiz(3);
        assert_eq!(quiz.len(), 3);
        assert!(quiz.questions.iter().all(|q| q.is_valid()));
    }

    #[test]
    fn test_fixtures_sample_pdf_has_header_and_pages() {
        let bytes = sample_pdf(&["page one", "page two"]);
        assert!(bytes.starts_with(b"%PDF"));

        let doc = lopdf::Document::load_mem(&bytes).expect("fixture pdf should parse");
        assert_eq!(doc.get_pages().len(), 2);
    }
}
