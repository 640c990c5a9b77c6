//! HTML pages for the web form.

use html_escape::{encode_double_quoted_attribute, encode_text};

use ggmax_core::BatchResult;

/// Name of the downloaded output file.
pub const DOWNLOAD_FILE_NAME: &str = "mensagens.txt";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f3f4f6; color: #111827; margin: 0; }
main {
    max-width: 900px; margin: 40px auto; padding: 2.5rem 2rem;
    background: #ffffff; border: 1px solid rgba(0,0,0,.10);
    border-radius: 12px; box-shadow: 0 8px 16px rgba(0,0,0,.08);
}
@media (prefers-color-scheme: dark) {
    body { background: #0e1117; color: #fafafa; }
    main { background: #262730; border-color: rgba(255,255,255,.12); box-shadow: 0 8px 16px rgba(0,0,0,.40); }
}
label { display: block; font-weight: 600; margin: 1.2rem 0 .4rem; }
textarea, select { width: 100%; box-sizing: border-box; font-family: monospace; }
button { font-weight: 600; padding: .6rem 1.5rem; border-radius: 6px; margin-top: 1.2rem; }
.notice { padding: .8rem 1rem; border-radius: 6px; background: rgba(250,204,21,.2); }
.error { padding: .8rem 1rem; border-radius: 6px; background: rgba(239,68,68,.2); }
ul.warnings { font-family: monospace; font-size: .9rem; }
"#;

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Gerador de Mensagens GGMAX</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<main>\n<h1>Gerador de Mensagens GGMAX</h1>\n{body}</main>\n</body>\n</html>\n"
    )
}

/// The conversion form. `selected` preselects a game in the dropdown.
pub fn form_page<'a>(
    games: impl IntoIterator<Item = &'a str>,
    selected: Option<&str>,
    notice: Option<&str>,
) -> String {
    let mut options = String::new();
    for game in games {
        let attr = if Some(game) == selected { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{}\"{attr}>{}</option>\n",
            encode_double_quoted_attribute(game),
            encode_text(game)
        ));
    }

    let notice = notice
        .map(|n| format!("<p class=\"notice\">{}</p>\n", encode_text(n)))
        .unwrap_or_default();

    layout(&format!(
        "{notice}<form method=\"post\" action=\"/convert\" enctype=\"multipart/form-data\">\n\
         <label for=\"game\">Selecione o jogo:</label>\n\
         <select id=\"game\" name=\"game\" required>\n{options}</select>\n\
         <label for=\"template_file\">Template .txt personalizado (opcional)</label>\n\
         <input type=\"file\" id=\"template_file\" name=\"template_file\" accept=\".txt\">\n\
         <h3>Dados brutos (uma linha por conta):</h3>\n\
         <label for=\"base_text\">Cole ou arraste as contas aqui</label>\n\
         <textarea id=\"base_text\" name=\"base_text\" rows=\"9\"></textarea>\n\
         <label for=\"base_file\">...ou envie um arquivo base.txt</label>\n\
         <input type=\"file\" id=\"base_file\" name=\"base_file\" accept=\".txt\">\n\
         <button type=\"submit\">Gerar mensagens</button>\n\
         </form>\n"
    ))
}

/// Preview of a finished batch with a download button and skipped lines.
pub fn result_page(game: &str, result: &BatchResult) -> String {
    let output = result.output();
    let text = encode_text(&output);
    let value = encode_double_quoted_attribute(&output);

    let warnings = if result.skipped().is_empty() {
        String::new()
    } else {
        let items: String = result
            .skipped()
            .iter()
            .map(|w| format!("<li>{}</li>\n", encode_text(&w.to_string())))
            .collect();
        format!(
            "<h3>Linhas ignoradas ({})</h3>\n<ul class=\"warnings\">\n{items}</ul>\n",
            result.skipped().len()
        )
    };

    let preview = if result.count() == 0 {
        "<p class=\"notice\">Nenhuma mensagem gerada.</p>\n".to_string()
    } else {
        format!(
            "<label for=\"preview\">Pr\u{e9}-visualiza\u{e7}\u{e3}o</label>\n\
             <textarea id=\"preview\" rows=\"14\" readonly>\n{text}</textarea>\n\
             <form method=\"post\" action=\"/download\">\n\
             <input type=\"hidden\" name=\"content\" value=\"{value}\">\n\
             <button type=\"submit\">Baixar mensagens</button>\n\
             </form>\n"
        )
    };

    layout(&format!(
        "<p><strong>{}</strong>: {} mensagem(ns) gerada(s)</p>\n{preview}{warnings}\
         <p><a href=\"/\">Nova convers\u{e3}o</a></p>\n",
        encode_text(game),
        result.count(),
    ))
}

pub fn error_page(message: &str) -> String {
    layout(&format!(
        "<p class=\"error\">{}</p>\n<p><a href=\"/\">Voltar</a></p>\n",
        encode_text(message)
    ))
}
