//! Shared fixture: a small but complete Lattes export, encoded as the CNPq
//! platform ships it (ISO-8859-1).

#![allow(dead_code)]

use encoding_rs::WINDOWS_1252;

pub const CV_XML: &str = r#"<?xml version="1.0" encoding="ISO-8859-1" standalone="no"?>
<CURRICULO-VITAE SISTEMA-ORIGEM-XML="LATTES_OFFLINE" NUMERO-IDENTIFICADOR="1234567890123456">
  <DADOS-GERAIS NOME-COMPLETO="Conceição Araújo" NOME-EM-CITACOES-BIBLIOGRAFICAS="ARAÚJO, C.">
    <RESUMO-CV TEXTO-RESUMO-CV-RH="Professora de computação." TEXTO-RESUMO-CV-RH-EN="Computing professor."/>
    <OUTRAS-INFORMACOES-RELEVANTES OUTRAS-INFORMACOES-RELEVANTES="Bolsista de produtividade."/>
    <ENDERECO ELETRONICO="I: conceicao@ufx.br; R: c@mail.com">
      <ENDERECO-PROFISSIONAL NOME-INSTITUICAO-EMPRESA="Universidade Federal X" NOME-ORGAO="Centro de Informática" CIDADE="São Paulo" UF="SP" PAIS="Brasil"/>
    </ENDERECO>
    <FORMACAO-ACADEMICA-TITULACAO>
      <GRADUACAO SEQUENCIA-FORMACAO="1" ANO-DE-INICIO="1998" ANO-DE-CONCLUSAO="2002" NOME-INSTITUICAO="UFX" NOME-CURSO="Ciência da Computação"/>
      <MESTRADO SEQUENCIA-FORMACAO="2" ANO-DE-INICIO="2003" ANO-DE-CONCLUSAO="2005" NOME-INSTITUICAO="UFY" TITULO-DA-DISSERTACAO-TESE="Análise estática" NOME-COMPLETO-DO-ORIENTADOR="Prof. Álvaro"/>
      <DOUTORADO SEQUENCIA-FORMACAO="3" ANO-DE-INICIO="2005" ANO-DE-CONCLUSAO="2009" NOME-INSTITUICAO="UFY" TITULO-DA-DISSERTACAO-TESE="Tipos dependentes" NOME-COMPLETO-DO-ORIENTADOR="Prof. Álvaro"/>
    </FORMACAO-ACADEMICA-TITULACAO>
    <ATUACOES-PROFISSIONAIS>
      <ATUACAO-PROFISSIONAL SEQUENCIA-ATIVIDADE="1" NOME-INSTITUICAO="Universidade Federal X">
        <VINCULOS ANO-INICIO="2010" ANO-FIM="" TIPO-DE-VINCULO="SERVIDOR_PUBLICO" ENQUADRAMENTO-FUNCIONAL="PROFESSOR_ASSOCIADO" CARGA-HORARIA-SEMANAL="40"/>
      </ATUACAO-PROFISSIONAL>
    </ATUACOES-PROFISSIONAIS>
    <AREAS-DE-ATUACAO>
      <AREA-DE-ATUACAO SEQUENCIA-AREA-DE-ATUACAO="1" NOME-GRANDE-AREA-DO-CONHECIMENTO="CIENCIAS_EXATAS_E_DA_TERRA" NOME-DA-AREA-DO-CONHECIMENTO="Ciência da Computação"/>
    </AREAS-DE-ATUACAO>
    <IDIOMAS>
      <IDIOMA DESCRICAO-DO-IDIOMA="Inglês" PROFICIENCIA-DE-LEITURA="BEM"/>
      <IDIOMA DESCRICAO-DO-IDIOMA="Francês" PROFICIENCIA-DE-LEITURA="RAZOAVELMENTE"/>
    </IDIOMAS>
  </DADOS-GERAIS>
  <PRODUCAO-BIBLIOGRAFICA>
    <ARTIGOS-PUBLICADOS>
      <ARTIGO-PUBLICADO SEQUENCIA-PRODUCAO="10">
        <DADOS-BASICOS-DO-ARTIGO SEQUENCIA-PRODUCAO="10" TITULO-DO-ARTIGO="Inferência de tipos" ANO-DO-ARTIGO="2020"/>
        <DETALHAMENTO-DO-ARTIGO TITULO-DO-PERIODICO-OU-REVISTA="Revista Brasileira" PAGINA-INICIAL="1" PAGINA-FINAL="20"/>
        <AUTORES NOME-COMPLETO-DO-AUTOR="Conceição Araújo" ORDEM-DE-AUTORIA="1"/>
        <AUTORES NOME-COMPLETO-DO-AUTOR="Bruno Lima" ORDEM-DE-AUTORIA="2"/>
      </ARTIGO-PUBLICADO>
      <ARTIGO-PUBLICADO SEQUENCIA-PRODUCAO="11">
        <DADOS-BASICOS-DO-ARTIGO SEQUENCIA-PRODUCAO="11" TITULO-DO-ARTIGO="Linearidade" ANO-DO-ARTIGO="2020"/>
      </ARTIGO-PUBLICADO>
      <ARTIGO-PUBLICADO SEQUENCIA-PRODUCAO="12">
        <DADOS-BASICOS-DO-ARTIGO SEQUENCIA-PRODUCAO="12" TITULO-DO-ARTIGO="Efeitos algébricos" ANO-DO-ARTIGO="2022"/>
      </ARTIGO-PUBLICADO>
    </ARTIGOS-PUBLICADOS>
  </PRODUCAO-BIBLIOGRAFICA>
  <PRODUCAO-TECNICA>
    <DEMAIS-TIPOS-DE-PRODUCAO-TECNICA>
      <APRESENTACAO-DE-TRABALHO SEQUENCIA-PRODUCAO="20">
        <DADOS-BASICOS-DA-APRESENTACAO-DE-TRABALHO NATUREZA="CONFERENCIA" TITULO="Palestra convidada" ANO="2019"/>
      </APRESENTACAO-DE-TRABALHO>
      <ORGANIZACAO-DE-EVENTO SEQUENCIA-PRODUCAO="21">
        <DETALHAMENTO-DA-ORGANIZACAO-DE-EVENTO INSTITUICAO-PROMOTORA="UFX"/>
      </ORGANIZACAO-DE-EVENTO>
    </DEMAIS-TIPOS-DE-PRODUCAO-TECNICA>
  </PRODUCAO-TECNICA>
  <OUTRA-PRODUCAO>
    <ORIENTACOES-CONCLUIDAS>
      <ORIENTACOES-CONCLUIDAS-PARA-MESTRADO>
        <ORIENTACOES-CONCLUIDAS-PARA-MESTRADO>
          <DADOS-BASICOS-DE-ORIENTACOES-CONCLUIDAS-PARA-MESTRADO SEQUENCIA-PRODUCAO="30" TITULO="Compilação incremental" ANO="2021"/>
          <DETALHAMENTO-DE-ORIENTACOES-CONCLUIDAS-PARA-MESTRADO NOME-DO-ORIENTADO="João Pereira" NOME-DA-INSTITUICAO="UFX"/>
        </ORIENTACOES-CONCLUIDAS-PARA-MESTRADO>
      </ORIENTACOES-CONCLUIDAS-PARA-MESTRADO>
    </ORIENTACOES-CONCLUIDAS>
  </OUTRA-PRODUCAO>
  <DADOS-COMPLEMENTARES>
    <FORMACAO-COMPLEMENTAR>
      <FORMACAO-COMPLEMENTAR-CURSO-DE-CURTA-DURACAO SEQUENCIA-FORMACAO-COMPLEMENTAR="1" TITULO-DA-FORMACAO-COMPLEMENTAR="Programação funcional" ANO-DE-INICIO="2001" ANO-DE-CONCLUSAO="2001" CARGA-HORARIA="40"/>
    </FORMACAO-COMPLEMENTAR>
  </DADOS-COMPLEMENTARES>
</CURRICULO-VITAE>
"#;

/// The fixture as ISO-8859-1 bytes.
pub fn cv_latin1() -> Vec<u8> {
    let (bytes, _, unmappable) = WINDOWS_1252.encode(CV_XML);
    assert!(!unmappable);
    bytes.into_owned()
}
