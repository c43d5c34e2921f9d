#[cfg(test)]
mod tests {
    use crate::corpus::{parse_document, parse_edition};
    use crate::detection::AscentVocabulary;
    use crate::entities::EntityMentionIndex;
    use crate::models::{Language, LanguagePair, ScanIssue};
    use crate::scanner::{ProcessResult, cross_reference};

    const SOURCE: &str = r#"<book id="1970_de">
      <article n="1" translation-of="SAC-Jahrbuch_1970_fr:10">
        <tocEntry title="Matterhorn-Nordwand"/>
        <s n="1-1"><w n="1-1-1" pos="NE">Schmid</w><w n="1-1-2" lemma="durchsteigen" pos="VVFIN">durchstieg</w><w n="1-1-3" pos="NE">Matterhorn</w></s>
      </article>
      <article n="2" translation-of="SAC-Jahrbuch_1970_fr:10">
        <s n="2-1"><w n="2-1-1">Nachtrag</w></s>
      </article>
      <article n="3" translation-of="SAC-Jahrbuch_1970_fr:30">
        <s n="3-1"><w n="3-1-1">erste</w></s>
      </article>
      <article n="3" translation-of="SAC-Jahrbuch_1970_fr:31">
        <s n="3-1"><w n="3-1-1">zweite</w></s>
      </article>
    </book>"#;

    const TARGET: &str = r#"<book id="1970_fr">
      <article n="10"><s n="10-1"><w n="10-1-1">Schmid</w></s></article>
      <article n="31"><s n="31-1"><w n="31-1-1">seconde</w></s></article>
    </book>"#;

    const SOURCE_NER: &str = r#"<ner>
      <geo><g type="mountain" stid="m1" span="1-1-3"/></geo>
      <persons><person id="p1" span="1-1-1"><firstname>Franz</firstname><lastname>Schmid</lastname></person></persons>
    </ner>"#;

    fn cross_reference_fixture() -> crate::models::YearbookReport {
        let source = parse_edition(SOURCE).unwrap();
        let target = parse_edition(TARGET).unwrap();
        let mut entities = EntityMentionIndex::new(&source.yearbook);
        entities.add_tree(Language::De, &parse_document(SOURCE_NER).unwrap());
        entities.add_tree(Language::Fr, &parse_document("<ner><geo/><persons/></ner>").unwrap());

        cross_reference(
            1970,
            &source,
            &target,
            &entities,
            LanguagePair::default(),
            &AscentVocabulary::default(),
        )
    }

    #[test]
    fn test_target_is_paired_once() {
        let report = cross_reference_fixture();
        let ids: Vec<(&str, &str)> = report
            .article_pairs
            .iter()
            .map(|p| (p.source_article_id.as_str(), p.target_article_id.as_str()))
            .collect();
        assert_eq!(ids, vec![("1", "10"), ("3", "31")]);
        assert!(report.issues.contains(&ScanIssue::DuplicateTranslationTarget {
            yearbook: "1970".to_string(),
            source_article_id: "2".to_string(),
            target_article_id: "10".to_string(),
            paired_with: "1".to_string(),
        }));
    }

    #[test]
    fn test_duplicate_article_id_keeps_later_article() {
        let report = cross_reference_fixture();
        assert!(report.issues.contains(&ScanIssue::DuplicateArticleId {
            yearbook: "1970".to_string(),
            language: Language::De,
            article_id: "3".to_string(),
        }));
        assert!(
            !report
                .issues
                .iter()
                .any(|issue| matches!(issue, ScanIssue::MissingTranslation { .. }))
        );
    }

    #[test]
    fn test_pair_ordinals_and_candidates() {
        let report = cross_reference_fixture();
        assert_eq!(report.article_pairs[0].pair_ordinal, 1);
        assert_eq!(report.article_pairs[1].pair_ordinal, 2);
        assert_eq!(report.candidate_count(), 1);

        let candidate = &report.article_pairs[0].candidates[0];
        assert_eq!(candidate.language, Language::De);
        assert_eq!(candidate.matched_lemmas, vec!["durchsteigen".to_string()]);
    }

    #[test]
    fn test_cross_reference_is_repeatable() {
        assert_eq!(cross_reference_fixture(), cross_reference_fixture());
    }

    #[test]
    fn test_error_messages_list_skipped_years_then_issues() {
        let result = ProcessResult {
            yearbooks: vec![cross_reference_fixture()],
            skipped: vec![ScanIssue::MissingEdition {
                year: 1971,
                path: "SAC-Jahrbuch_1971_de.xml".to_string(),
            }],
        };

        let messages = result.error_messages();
        assert_eq!(messages.len(), 1 + result.yearbooks[0].issues.len());
        assert!(messages[0].contains("1971"));
        assert_eq!(
            messages[1..],
            result.yearbooks[0]
                .issues
                .iter()
                .map(|issue| issue.to_string())
                .collect::<Vec<_>>()[..]
        );
        assert!(messages[1..].iter().all(|m| m.starts_with("Yearbook 1970")));
    }
}
