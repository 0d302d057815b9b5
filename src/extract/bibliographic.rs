//! Extractors for `PRODUCAO-BIBLIOGRAFICA`.
//!
//! Each publication element carries a `DADOS-BASICOS-*` block (title, year,
//! sequence number), a `DETALHAMENTO-*` block (venue details) and repeated
//! `AUTORES` children in citation order.

use crate::document::Element;

use super::ident::sequence_id;
use super::model::{Article, BookItem, EventWork, PressText};
use super::names_of;
use super::sort::sort_by_year_desc;

const BIBLIOGRAPHIC: &str = "PRODUCAO-BIBLIOGRAFICA";

fn authors(item: &Element) -> Vec<String> {
    names_of(item, "AUTORES", "NOME-COMPLETO-DO-AUTOR")
}

fn page_range(detail: &Element) -> String {
    format!("{}-{}", detail.attr("PAGINA-INICIAL"), detail.attr("PAGINA-FINAL"))
}

pub fn extract_articles(root: &Element) -> Vec<Article> {
    let Some(block) = root.path(&[BIBLIOGRAPHIC, "ARTIGOS-PUBLICADOS"]) else {
        return Vec::new();
    };

    let mut articles: Vec<Article> = block
        .children_named("ARTIGO-PUBLICADO")
        .map(|item| {
            let basic = item.child_or_empty("DADOS-BASICOS-DO-ARTIGO");
            let detail = item.child_or_empty("DETALHAMENTO-DO-ARTIGO");
            let title = basic.attr("TITULO-DO-ARTIGO");
            let year = basic.attr("ANO-DO-ARTIGO");
            Article {
                id: sequence_id("artigo", None, basic.attr("SEQUENCIA-PRODUCAO"), &[title, year]),
                title: title.to_string(),
                year: year.to_string(),
                doi: basic.attr("DOI").to_string(),
                journal: detail.attr("TITULO-DO-PERIODICO-OU-REVISTA").to_string(),
                volume: detail.attr("VOLUME").to_string(),
                pages: page_range(detail),
                issn: detail.attr("ISSN").to_string(),
                authors: authors(item),
            }
        })
        .collect();

    sort_by_year_desc(&mut articles);
    articles
}

/// Books first, then chapters, merged and sorted newest first.
pub fn extract_books_and_chapters(root: &Element) -> Vec<BookItem> {
    let Some(block) = root.path(&[BIBLIOGRAPHIC, "LIVROS-E-CAPITULOS"]) else {
        return Vec::new();
    };

    let books = block
        .child_or_empty("LIVROS-PUBLICADOS-OU-ORGANIZADOS")
        .children_named("LIVRO-PUBLICADO-OU-ORGANIZADO")
        .map(|item| {
            let basic = item.child_or_empty("DADOS-BASICOS-DO-LIVRO");
            let detail = item.child_or_empty("DETALHAMENTO-DO-LIVRO");
            let title = basic.attr("TITULO-DO-LIVRO");
            let year = basic.attr("ANO");
            BookItem {
                id: sequence_id("livro", None, basic.attr("SEQUENCIA-PRODUCAO"), &[title, year]),
                kind: "Livro".to_string(),
                title: title.to_string(),
                year: year.to_string(),
                book_title: String::new(),
                publisher: detail.attr("NOME-DA-EDITORA").to_string(),
                isbn: detail.attr("ISBN").to_string(),
                pages: detail.attr("NUMERO-DE-PAGINAS").to_string(),
                authors: authors(item),
            }
        });

    let chapters = block
        .child_or_empty("CAPITULOS-DE-LIVROS-PUBLICADOS")
        .children_named("CAPITULO-DE-LIVRO-PUBLICADO")
        .map(|item| {
            let basic = item.child_or_empty("DADOS-BASICOS-DO-CAPITULO");
            let detail = item.child_or_empty("DETALHAMENTO-DO-CAPITULO");
            let title = basic.attr("TITULO-DO-CAPITULO-DO-LIVRO");
            let year = basic.attr("ANO");
            BookItem {
                id: sequence_id(
                    "capitulo",
                    None,
                    basic.attr("SEQUENCIA-PRODUCAO"),
                    &[title, year],
                ),
                kind: "Capítulo".to_string(),
                title: title.to_string(),
                year: year.to_string(),
                book_title: detail.attr("TITULO-DO-LIVRO").to_string(),
                publisher: detail.attr("NOME-DA-EDITORA").to_string(),
                isbn: detail.attr("ISBN").to_string(),
                pages: page_range(detail),
                authors: authors(item),
            }
        });

    let mut items: Vec<BookItem> = books.chain(chapters).collect();
    sort_by_year_desc(&mut items);
    items
}

pub fn extract_event_works(root: &Element) -> Vec<EventWork> {
    let Some(block) = root.path(&[BIBLIOGRAPHIC, "TRABALHOS-EM-EVENTOS"]) else {
        return Vec::new();
    };

    let mut works: Vec<EventWork> = block
        .children_named("TRABALHO-EM-EVENTOS")
        .map(|item| {
            let basic = item.child_or_empty("DADOS-BASICOS-DO-TRABALHO");
            let detail = item.child_or_empty("DETALHAMENTO-DO-TRABALHO");
            let title = basic.attr("TITULO-DO-TRABALHO");
            let year = basic.attr("ANO-DO-TRABALHO");
            EventWork {
                id: sequence_id(
                    "trabalho-evento",
                    None,
                    basic.attr("SEQUENCIA-PRODUCAO"),
                    &[title, year],
                ),
                title: title.to_string(),
                year: year.to_string(),
                nature: basic.attr("NATUREZA").to_string(),
                event: detail.attr("NOME-DO-EVENTO").to_string(),
                city: detail.attr("CIDADE-DO-EVENTO").to_string(),
                authors: authors(item),
            }
        })
        .collect();

    sort_by_year_desc(&mut works);
    works
}

pub fn extract_press_texts(root: &Element) -> Vec<PressText> {
    let Some(block) = root.path(&[BIBLIOGRAPHIC, "TEXTOS-EM-JORNAIS-OU-REVISTAS"]) else {
        return Vec::new();
    };

    let mut texts: Vec<PressText> = block
        .children_named("TEXTO-EM-JORNAL-OU-REVISTA")
        .map(|item| {
            let basic = item.child_or_empty("DADOS-BASICOS-DO-TEXTO");
            let detail = item.child_or_empty("DETALHAMENTO-DO-TEXTO");
            let title = basic.attr("TITULO-DO-TEXTO");
            let year = basic.attr("ANO-DO-TEXTO");
            PressText {
                id: sequence_id(
                    "texto-jornal",
                    None,
                    basic.attr("SEQUENCIA-PRODUCAO"),
                    &[title, year],
                ),
                title: title.to_string(),
                year: year.to_string(),
                nature: basic.attr("NATUREZA").to_string(),
                outlet: detail.attr("TITULO-DO-JORNAL-OU-REVISTA").to_string(),
                authors: authors(item),
            }
        })
        .collect();

    sort_by_year_desc(&mut texts);
    texts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_text;

    fn doc() -> Element {
        parse_text(
            r#"<CURRICULO-VITAE><PRODUCAO-BIBLIOGRAFICA>
              <ARTIGOS-PUBLICADOS>
                <ARTIGO-PUBLICADO SEQUENCIA-PRODUCAO="9">
                  <DADOS-BASICOS-DO-ARTIGO SEQUENCIA-PRODUCAO="9" TITULO-DO-ARTIGO="Antigo" ANO-DO-ARTIGO="2015"/>
                  <DETALHAMENTO-DO-ARTIGO TITULO-DO-PERIODICO-OU-REVISTA="Revista A" PAGINA-INICIAL="1" PAGINA-FINAL="10"/>
                  <AUTORES NOME-COMPLETO-DO-AUTOR="Zeca"/>
                  <AUTORES NOME-COMPLETO-DO-AUTOR="Ana"/>
                  <AUTORES NOME-COMPLETO-DO-AUTOR="Maria"/>
                </ARTIGO-PUBLICADO>
                <ARTIGO-PUBLICADO>
                  <DADOS-BASICOS-DO-ARTIGO SEQUENCIA-PRODUCAO="12" TITULO-DO-ARTIGO="Novo" ANO-DO-ARTIGO="2021" DOI="10.1/x"/>
                </ARTIGO-PUBLICADO>
              </ARTIGOS-PUBLICADOS>
              <LIVROS-E-CAPITULOS>
                <LIVROS-PUBLICADOS-OU-ORGANIZADOS>
                  <LIVRO-PUBLICADO-OU-ORGANIZADO>
                    <DADOS-BASICOS-DO-LIVRO SEQUENCIA-PRODUCAO="4" TITULO-DO-LIVRO="Livro" ANO="2018"/>
                    <DETALHAMENTO-DO-LIVRO NOME-DA-EDITORA="Ed" NUMERO-DE-PAGINAS="300"/>
                  </LIVRO-PUBLICADO-OU-ORGANIZADO>
                </LIVROS-PUBLICADOS-OU-ORGANIZADOS>
                <CAPITULOS-DE-LIVROS-PUBLICADOS>
                  <CAPITULO-DE-LIVRO-PUBLICADO>
                    <DADOS-BASICOS-DO-CAPITULO SEQUENCIA-PRODUCAO="5" TITULO-DO-CAPITULO-DO-LIVRO="Cap" ANO="2018"/>
                    <DETALHAMENTO-DO-CAPITULO TITULO-DO-LIVRO="Coletânea" PAGINA-INICIAL="20" PAGINA-FINAL="35"/>
                  </CAPITULO-DE-LIVRO-PUBLICADO>
                </CAPITULOS-DE-LIVROS-PUBLICADOS>
              </LIVROS-E-CAPITULOS>
              <TRABALHOS-EM-EVENTOS>
                <TRABALHO-EM-EVENTOS>
                  <DADOS-BASICOS-DO-TRABALHO SEQUENCIA-PRODUCAO="7" TITULO-DO-TRABALHO="Paper" ANO-DO-TRABALHO="2019" NATUREZA="COMPLETO"/>
                  <DETALHAMENTO-DO-TRABALHO NOME-DO-EVENTO="SBLP" CIDADE-DO-EVENTO="Natal"/>
                </TRABALHO-EM-EVENTOS>
              </TRABALHOS-EM-EVENTOS>
            </PRODUCAO-BIBLIOGRAFICA></CURRICULO-VITAE>"#,
        )
        .unwrap()
    }

    #[test]
    fn articles_newest_first_with_authors_in_order() {
        let articles = extract_articles(&doc());
        assert_eq!(articles[0].id, "artigo-12");
        assert_eq!(articles[0].doi, "10.1/x");
        assert_eq!(articles[0].pages, "-");
        assert_eq!(articles[1].id, "artigo-9");
        assert_eq!(articles[1].authors, vec!["Zeca", "Ana", "Maria"]);
        assert_eq!(articles[1].pages, "1-10");
    }

    #[test]
    fn books_before_chapters_on_equal_year() {
        let items = extract_books_and_chapters(&doc());
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["livro-4", "capitulo-5"]);
        assert_eq!(items[0].pages, "300");
        assert_eq!(items[1].book_title, "Coletânea");
        assert_eq!(items[1].pages, "20-35");
    }

    #[test]
    fn event_works() {
        let works = extract_event_works(&doc());
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].id, "trabalho-evento-7");
        assert_eq!(works[0].event, "SBLP");
    }

    #[test]
    fn missing_categories_are_empty() {
        assert!(extract_press_texts(&doc()).is_empty());
        let bare = Element::new("CURRICULO-VITAE");
        assert!(extract_articles(&bare).is_empty());
        assert!(extract_books_and_chapters(&bare).is_empty());
        assert!(extract_event_works(&bare).is_empty());
    }
}
