//! The single HTML page.
//!
//! Self-contained: inline CSS and a small script that talks to the JSON API.
//! Model output is inserted with `textContent`, never as HTML.

/// The tutor page served at `/`.
pub const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Tutor-IA</title>
    <style>
        * { box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f6f7fb;
            color: #1f2430;
            max-width: 760px;
            margin: 0 auto;
            padding: 24px 16px 48px;
            line-height: 1.5;
        }

        h1 { font-size: 1.8rem; margin-bottom: 8px; }
        h2 { font-size: 1.2rem; margin-top: 32px; }

        .card {
            background: #fff;
            border: 1px solid #e1e4ec;
            border-radius: 8px;
            padding: 16px;
            margin-top: 12px;
        }

        .question { margin-bottom: 16px; }
        .question p { font-weight: 600; margin: 0 0 6px; }
        .question label { display: block; margin: 2px 0; cursor: pointer; }

        input[type="text"], select {
            width: 100%;
            padding: 8px 10px;
            font-size: 1rem;
            border: 1px solid #c8ccd8;
            border-radius: 6px;
        }

        button {
            margin-top: 12px;
            padding: 8px 18px;
            font-size: 1rem;
            border: none;
            border-radius: 6px;
            background: #3b5bdb;
            color: #fff;
            cursor: pointer;
        }

        button:disabled { background: #9aa5c8; cursor: wait; }

        .notice {
            margin-top: 12px;
            padding: 10px 12px;
            border-radius: 6px;
            display: none;
        }

        .notice.info { background: #e7f0ff; display: block; }
        .notice.success { background: #e6f6ea; display: block; }
        .notice.warning { background: #fff4db; display: block; }
        .notice.error { background: #fde8e8; display: block; }

        #response { white-space: pre-wrap; }

        .hidden { display: none; }

        footer {
            margin-top: 48px;
            padding-top: 12px;
            border-top: 1px solid #e1e4ec;
            font-size: 0.85rem;
            color: #6b7285;
        }
    </style>
</head>
<body>
    <h1>📚 Tutor-IA: Tu tutor personalizado con IA</h1>
    <p>
        Tutor-IA es una aplicación educativa que adapta sus explicaciones según tu forma de aprender.
        Puedes contestar un cuestionario o elegir tu estilo manualmente.
    </p>

    <h2>🎛 Configura tu estilo de aprendizaje</h2>
    <label>
        <input type="checkbox" id="quiz-toggle">
        ¿Quieres detectar tu estilo automáticamente con un cuestionario?
    </label>

    <form id="quiz-form" class="card hidden">
        <div id="questions"></div>
        <button type="submit">Detectar mi estilo</button>
    </form>

    <div id="manual" class="card">
        <label for="style-select">Selecciona tu estilo de aprendizaje:</label>
        <select id="style-select">
            <option value="visual">Visual</option>
            <option value="auditory">Auditivo</option>
            <option value="textual">Textual</option>
        </select>
    </div>

    <div id="style-notice" class="notice"></div>

    <h2>💬 Haz tu consulta a Tutor-IA</h2>
    <div class="card">
        <label for="topic">Escribe tu duda o tema que quieras entender mejor:</label>
        <input type="text" id="topic" autocomplete="off">
        <button id="ask-button" type="button">Consultar</button>
        <div id="ask-warning" class="notice"></div>
    </div>

    <div id="answer" class="hidden">
        <p>🧠 Respuesta del Tutor-IA:</p>
        <div id="response" class="notice"></div>
    </div>

    <footer>Tutor-IA · explicaciones adaptadas a tu estilo de aprendizaje</footer>

    <script>
        const $ = (id) => document.getElementById(id);

        async function api(method, path, body) {
            const options = { method, credentials: 'same-origin', headers: {} };
            if (body !== undefined) {
                options.headers['Content-Type'] = 'application/json';
                options.body = JSON.stringify(body);
            }
            const res = await fetch(path, options);
            let data = null;
            try { data = await res.json(); } catch (_) { data = null; }
            return { ok: res.ok, status: res.status, data };
        }

        function notice(el, kind, text) {
            el.className = 'notice ' + kind;
            el.textContent = text;
        }

        function clearNotice(el) {
            el.className = 'notice';
            el.textContent = '';
        }

        function showMode(quizMode) {
            $('quiz-toggle').checked = quizMode;
            $('quiz-form').classList.toggle('hidden', !quizMode);
            $('manual').classList.toggle('hidden', quizMode);
        }

        async function loadQuiz() {
            const { data } = await api('GET', '/api/quiz');
            const container = $('questions');
            container.textContent = '';
            (data || []).forEach((q, qi) => {
                const block = document.createElement('div');
                block.className = 'question';
                const title = document.createElement('p');
                title.textContent = q.prompt;
                block.appendChild(title);
                q.options.forEach((opt, oi) => {
                    const label = document.createElement('label');
                    const input = document.createElement('input');
                    input.type = 'radio';
                    input.name = 'q' + qi;
                    input.value = opt;
                    input.checked = oi === 0;
                    label.appendChild(input);
                    label.appendChild(document.createTextNode(' ' + opt));
                    block.appendChild(label);
                });
                container.appendChild(block);
            });
        }

        async function loadSession() {
            const { data } = await api('GET', '/api/session');
            if (!data) return;
            $('style-select').value = data.style;
            showMode(data.quiz_mode);
            if (!data.quiz_mode) {
                notice($('style-notice'), 'info', 'Estilo actual: ' + data.label);
            }
        }

        $('quiz-toggle').addEventListener('change', async (e) => {
            const enabled = e.target.checked;
            showMode(enabled);
            clearNotice($('style-notice'));
            await api('POST', '/api/session/quiz-mode', { enabled });
            if (!enabled) {
                await selectStyle($('style-select').value);
            }
        });

        $('quiz-form').addEventListener('submit', async (e) => {
            e.preventDefault();
            const answers = [];
            document.querySelectorAll('#questions .question').forEach((block, qi) => {
                const checked = block.querySelector('input[name="q' + qi + '"]:checked');
                answers.push(checked ? checked.value : '');
            });
            const { ok, data } = await api('POST', '/api/style/detect', { answers });
            if (ok) {
                $('style-select').value = data.style;
                notice($('style-notice'), 'success', data.message);
            } else {
                notice($('style-notice'), 'warning', data ? data.warning : 'Error');
            }
        });

        async function selectStyle(style) {
            const { ok, data } = await api('POST', '/api/style', { style });
            if (ok) {
                notice($('style-notice'), 'info', data.message);
            } else {
                notice($('style-notice'), 'warning', data ? data.warning : 'Error');
            }
        }

        $('style-select').addEventListener('change', (e) => selectStyle(e.target.value));

        async function ask() {
            const button = $('ask-button');
            const topic = $('topic').value;
            clearNotice($('ask-warning'));
            button.disabled = true;
            try {
                const { ok, status, data } = await api('POST', '/api/ask', { topic });
                if (status === 422) {
                    notice($('ask-warning'), 'warning', data.warning);
                    return;
                }
                $('answer').classList.remove('hidden');
                if (ok) {
                    notice($('response'), data.ok ? 'info' : 'error', data.response);
                } else {
                    notice($('response'), 'error', data ? data.warning : 'Error ' + status);
                }
            } catch (err) {
                $('answer').classList.remove('hidden');
                notice($('response'), 'error', String(err));
            } finally {
                button.disabled = false;
            }
        }

        $('ask-button').addEventListener('click', ask);
        $('topic').addEventListener('keydown', (e) => {
            if (e.key === 'Enter') ask();
        });

        loadQuiz().then(loadSession);
    </script>
</body>
</html>
"#;
