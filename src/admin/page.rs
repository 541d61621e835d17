//! Embedded single-page management UI.
//!
//! Pure presentation over the admin API: lists rules, edits them through a
//! modal form, and offers the restart button that makes changes live.

use axum::response::Html;

pub async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_PAGE)
}

const ADMIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Mock Service Admin</title>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f5f5f5; padding: 20px; }
        .container { max-width: 1100px; margin: 0 auto; }
        h1 { color: #333; margin-bottom: 20px; }
        .card { background: white; border-radius: 8px; padding: 20px; margin-bottom: 20px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .form-group { margin-bottom: 15px; }
        label { display: block; margin-bottom: 5px; font-weight: 500; color: #555; }
        input, select, textarea { width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; }
        textarea { height: 100px; font-family: monospace; }
        .btn { padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; font-size: 14px; margin-right: 10px; }
        .btn-primary { background: #007bff; color: white; }
        .btn-danger { background: #dc3545; color: white; }
        .btn-secondary { background: #6c757d; color: white; }
        .btn-warning { background: #fd7e14; color: white; }
        .btn:hover { opacity: 0.9; }
        .alert { padding: 12px 16px; border-radius: 4px; margin-bottom: 15px; display: none; background: #fff3cd; color: #856404; border: 1px solid #ffc107; }
        .alert.show { display: block; }
        table { width: 100%; border-collapse: collapse; }
        th, td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
        th { background: #f8f9fa; font-weight: 600; }
        .method { display: inline-block; padding: 2px 8px; border-radius: 3px; font-size: 12px; font-weight: bold; color: white; }
        .method-get { background: #28a745; }
        .method-post { background: #007bff; }
        .method-put { background: #ffc107; color: black; }
        .method-delete { background: #dc3545; }
        .path { font-family: monospace; color: #666; }
        .modal { display: none; position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); }
        .modal.active { display: flex; align-items: center; justify-content: center; }
        .modal-content { background: white; padding: 30px; border-radius: 8px; width: 500px; max-width: 90%; }
        .modal-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px; }
        .close { font-size: 24px; cursor: pointer; color: #999; }
        .row { display: flex; gap: 15px; }
        .row .form-group { flex: 1; }
        .empty { text-align: center; padding: 40px; color: #999; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Mock Service Admin</h1>

        <div id="restart-alert" class="alert">
            Rules changed. Restart the service for changes to take effect.
            <button class="btn btn-warning" onclick="restartService()" style="margin-left: 15px;">Restart</button>
        </div>

        <div class="card">
            <button class="btn btn-primary" onclick="openModal()">+ New mock rule</button>
            <button class="btn btn-warning" onclick="restartService()">Restart service</button>
        </div>

        <div class="card">
            <h3 style="margin-bottom: 15px;">Configured rules</h3>
            <table>
                <thead>
                    <tr><th>ID</th><th>Method</th><th>Path</th><th>Description</th><th>Status</th><th>Actions</th></tr>
                </thead>
                <tbody id="rules-table">
                    <tr><td colspan="6" class="empty">Loading...</td></tr>
                </tbody>
            </table>
        </div>
    </div>

    <div id="modal" class="modal">
        <div class="modal-content">
            <div class="modal-header">
                <h3 id="modal-title">New mock rule</h3>
                <span class="close" onclick="closeModal()">&times;</span>
            </div>
            <form id="rule-form">
                <input type="hidden" id="rule-id">
                <div class="row">
                    <div class="form-group">
                        <label>Method</label>
                        <select id="method">
                            <option value="GET">GET</option>
                            <option value="POST">POST</option>
                            <option value="PUT">PUT</option>
                            <option value="DELETE">DELETE</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label>Status code</label>
                        <input type="number" id="status_code" value="200">
                    </div>
                </div>
                <div class="form-group">
                    <label>Request path (e.g. /api/sms/send)</label>
                    <input type="text" id="path" placeholder="/api/xxx" required>
                </div>
                <div class="form-group">
                    <label>Description</label>
                    <input type="text" id="description" placeholder="What this endpoint mocks">
                </div>
                <div class="form-group">
                    <label>Response body (JSON)</label>
                    <textarea id="response_body" placeholder='{"success": true, "message": "ok"}'></textarea>
                </div>
                <div class="form-group">
                    <label>Response delay (seconds)</label>
                    <input type="number" id="delay" value="0" step="0.1" min="0">
                </div>
                <button type="submit" class="btn btn-primary">Save</button>
                <button type="button" class="btn btn-secondary" onclick="closeModal()">Cancel</button>
            </form>
        </div>
    </div>

    <script>
        const API_BASE = '/admin';

        function showRestartAlert() {
            document.getElementById('restart-alert').classList.add('show');
        }

        async function restartService() {
            if (!confirm('Restart the service now?')) return;
            try {
                await fetch(`${API_BASE}/restart`, { method: 'POST' });
            } catch (e) {
                // The restart drops the connection; that is expected.
            }
            alert('Service is restarting, reload the page shortly...');
            setTimeout(() => location.reload(), 3000);
        }

        async function loadRules() {
            const resp = await fetch(`${API_BASE}/rules`);
            const data = await resp.json();
            const tbody = document.getElementById('rules-table');

            if (data.rules.length === 0) {
                tbody.innerHTML = '<tr><td colspan="6" class="empty">No rules yet. Add one above.</td></tr>';
                return;
            }

            tbody.innerHTML = data.rules.map(rule => `
                <tr>
                    <td>${rule.id}</td>
                    <td><span class="method method-${rule.method.toLowerCase()}">${rule.method}</span></td>
                    <td class="path">${rule.path}</td>
                    <td>${rule.description || '-'}</td>
                    <td>${rule.status_code}</td>
                    <td>
                        <button class="btn btn-secondary" onclick="editRule('${rule.id}')">Edit</button>
                        <button class="btn btn-danger" onclick="deleteRule('${rule.id}')">Delete</button>
                    </td>
                </tr>
            `).join('');
        }

        function openModal(rule = null) {
            document.getElementById('modal').classList.add('active');
            document.getElementById('modal-title').textContent = rule ? 'Edit rule' : 'New mock rule';

            if (rule) {
                document.getElementById('rule-id').value = rule.id;
                document.getElementById('method').value = rule.method;
                document.getElementById('path').value = rule.path;
                document.getElementById('description').value = rule.description || '';
                document.getElementById('response_body').value = JSON.stringify(rule.response_body, null, 2);
                document.getElementById('status_code').value = rule.status_code;
                document.getElementById('delay').value = rule.delay;
            } else {
                document.getElementById('rule-form').reset();
                document.getElementById('rule-id').value = '';
                document.getElementById('status_code').value = '200';
                document.getElementById('delay').value = '0';
            }
        }

        function closeModal() {
            document.getElementById('modal').classList.remove('active');
        }

        async function editRule(id) {
            const resp = await fetch(`${API_BASE}/rules/${id}`);
            const rule = await resp.json();
            openModal(rule);
        }

        async function deleteRule(id) {
            if (!confirm('Delete this rule?')) return;
            await fetch(`${API_BASE}/rules/${id}`, { method: 'DELETE' });
            loadRules();
            showRestartAlert();
        }

        document.getElementById('rule-form').addEventListener('submit', async (e) => {
            e.preventDefault();

            let responseBody = {};
            try {
                const bodyText = document.getElementById('response_body').value.trim();
                if (bodyText) responseBody = JSON.parse(bodyText);
            } catch (err) {
                alert('Response body must be valid JSON');
                return;
            }

            const data = {
                method: document.getElementById('method').value,
                path: document.getElementById('path').value,
                description: document.getElementById('description').value,
                response_body: responseBody,
                status_code: parseInt(document.getElementById('status_code').value),
                delay: parseFloat(document.getElementById('delay').value) || 0
            };

            const ruleId = document.getElementById('rule-id').value;
            const url = ruleId ? `${API_BASE}/rules/${ruleId}` : `${API_BASE}/rules`;
            const method = ruleId ? 'PUT' : 'POST';

            await fetch(url, {
                method,
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(data)
            });

            closeModal();
            loadRules();
            showRestartAlert();
        });

        loadRules();
    </script>
</body>
</html>
"#;
