use axum::response::Html;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Phishing URL Detector</title>
    <style>
        body {
            margin: 0;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f4f5f7;
            color: #1f2933;
            display: flex;
            justify-content: center;
            padding-top: 10vh;
        }
        .container {
            width: 100%;
            max-width: 560px;
            background: white;
            border-radius: 12px;
            padding: 2rem;
            box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
        }
        form { display: flex; gap: 0.5rem; }
        input { flex: 1; padding: 0.6rem; font-size: 1rem; }
        button { padding: 0.6rem 1.2rem; font-size: 1rem; cursor: pointer; }
        .safe { color: #1e7d32; }
        .suspicious { color: #c62828; }
        ul { padding-left: 1.2rem; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Phishing URL Detector</h1>
        <form id="check-form">
            <input id="url" type="text" placeholder="https://example.com" autocomplete="off">
            <button type="submit">Check</button>
        </form>
        <div id="result"></div>
    </div>
    <script>
        const labels = {
            numbers_in_domain: 'Numbers in domain',
            excessive_subdomains: 'Excessive subdomains',
            special_chars: 'Special characters'
        };
        document.getElementById('check-form').addEventListener('submit', async (event) => {
            event.preventDefault();
            const result = document.getElementById('result');
            result.textContent = 'Checking...';
            try {
                const response = await fetch('/check_url', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ url: document.getElementById('url').value })
                });
                const data = await response.json();
                if (!response.ok) {
                    result.textContent = data.error || 'Request failed';
                    return;
                }
                const heading = document.createElement('h2');
                heading.className = data.is_suspicious ? 'suspicious' : 'safe';
                heading.textContent = data.is_suspicious ? 'Suspicious' : 'Looks safe';
                const list = document.createElement('ul');
                const items = [['VirusTotal blacklisted', data.virustotal_blacklisted]];
                for (const [key, label] of Object.entries(labels)) {
                    items.push([label, data.suspicious_patterns[key]]);
                }
                for (const [label, flagged] of items) {
                    const li = document.createElement('li');
                    li.textContent = `${label}: ${flagged ? 'yes' : 'no'}`;
                    list.appendChild(li);
                }
                const checked = document.createElement('p');
                checked.textContent = data.url;
                result.replaceChildren(checked, heading, list);
            } catch (err) {
                result.textContent = 'Request failed';
            }
        });
    </script>
</body>
</html>
"#;
