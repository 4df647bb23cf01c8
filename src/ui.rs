use crate::theme::Theme;

pub fn render_index(theme: Theme) -> String {
    INDEX_HTML
        .replace("{{THEME}}", theme.as_str())
        .replace("{{TOGGLE_LABEL}}", theme.toggle_label())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance Calculator</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600&display=swap');

    :root {
      --bg: #f5f6fa;
      --card: #ffffff;
      --ink: #2d3436;
      --muted: #636e72;
      --accent: #6c5ce7;
      --success: #00b894;
      --danger: #e17055;
      --warning-color: #e17055;
      --border: rgba(45, 52, 54, 0.08);
      --shadow: 0 18px 48px rgba(45, 52, 54, 0.12);
    }

    body[data-theme="dark"] {
      --bg: #1e272e;
      --card: #2d3436;
      --ink: #dfe6e9;
      --muted: #b2bec3;
      --border: rgba(223, 230, 233, 0.1);
      --shadow: 0 18px 48px rgba(0, 0, 0, 0.4);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Poppins", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
      transition: background 200ms ease, color 200ms ease;
    }

    .app {
      width: min(900px, 100%);
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
      flex-wrap: wrap;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      border: 1px solid var(--border);
      padding: 28px;
      display: grid;
      gap: 20px;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: var(--border);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      color: var(--muted);
      box-shadow: none;
      padding: 8px 18px;
    }

    .tab.active {
      background: var(--card);
      color: var(--accent);
    }

    .tab-content {
      display: none;
    }

    .tab-content.active {
      display: grid;
      gap: 24px;
    }

    .fields {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    input {
      font: inherit;
      padding: 12px 14px;
      border-radius: 12px;
      border: 1px solid var(--border);
      background: var(--bg);
      color: var(--ink);
    }

    .error {
      min-height: 1.2em;
      font-size: 0.85rem;
      color: var(--danger);
    }

    .actions {
      display: flex;
      gap: 12px;
      flex-wrap: wrap;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
    }

    .btn-secondary {
      background: var(--border);
      color: var(--ink);
    }

    .result {
      display: none;
      gap: 20px;
    }

    .result.visible {
      display: grid;
    }

    .headline {
      display: flex;
      align-items: center;
      gap: 16px;
      flex-wrap: wrap;
    }

    .percentage {
      font-size: 2.6rem;
      font-weight: 600;
    }

    .status-badge {
      border-radius: 999px;
      padding: 6px 14px;
      font-weight: 600;
      font-size: 0.9rem;
    }

    .eligible {
      background: rgba(0, 184, 148, 0.15);
      color: var(--success);
    }

    .not-eligible {
      background: rgba(225, 112, 85, 0.15);
      color: var(--danger);
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .stat {
      border-radius: 16px;
      border: 1px solid var(--border);
      padding: 14px;
      display: grid;
      gap: 4px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.4rem;
      font-weight: 600;
    }

    .note {
      margin: 0;
      padding: 14px 16px;
      border-radius: 14px;
      background: var(--border);
    }

    .chart {
      width: 100%;
      height: 300px;
      display: block;
    }

    .subject-list {
      display: grid;
      gap: 12px;
    }

    .subject-item {
      display: grid;
      grid-template-columns: 1fr auto auto;
      align-items: center;
      gap: 16px;
      padding: 14px 18px;
      border-radius: 16px;
      border: 1px solid var(--border);
    }

    .subject-item h4 {
      margin: 0 0 4px;
    }

    .subject-item p {
      margin: 0;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .subject-item .shortfall {
      color: var(--warning-color);
      margin-top: 4px;
    }

    .subject-item .subject-percentage {
      font-size: 1.3rem;
      font-weight: 600;
      text-align: right;
    }

    .delete-btn {
      background: transparent;
      color: var(--danger);
      padding: 8px 12px;
    }

    .empty-state {
      text-align: center;
      color: var(--muted);
      padding: 24px;
    }

    @media (max-width: 600px) {
      .card {
        padding: 22px 18px;
      }
      .subject-item {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body data-theme="{{THEME}}">
  <main class="app">
    <header>
      <div>
        <h1>Attendance Calculator</h1>
        <p class="subtitle">Check your eligibility and how many lectures you need to reach 75%.</p>
      </div>
      <button class="btn-secondary" id="theme-toggle" type="button">{{TOGGLE_LABEL}}</button>
    </header>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="overall" role="tab" aria-selected="true">Overall</button>
      <button class="tab" type="button" data-tab="subjects" role="tab" aria-selected="false">Subject-wise</button>
    </div>

    <section class="tab-content card active" id="overall">
      <div class="fields">
        <label>Total lectures
          <input id="total-lectures" type="number" min="1" inputmode="numeric" />
          <span class="error" id="total-error"></span>
        </label>
        <label>Attended lectures
          <input id="attended-lectures" type="number" min="0" inputmode="numeric" />
          <span class="error" id="attended-error"></span>
        </label>
      </div>
      <div class="actions">
        <button class="btn-primary" id="calculate-btn" type="button">Calculate</button>
        <button class="btn-secondary" id="overall-reset-btn" type="button">Reset</button>
      </div>

      <div class="result" id="overall-result">
        <div class="headline">
          <span class="percentage" id="overall-percentage">0.0%</span>
          <span class="status-badge" id="overall-status"></span>
        </div>
        <div class="stats">
          <div class="stat"><span class="label">Total</span><span class="value" id="overall-total">0</span></div>
          <div class="stat"><span class="label">Attended</span><span class="value" id="overall-attended">0</span></div>
          <div class="stat"><span class="label">Missed</span><span class="value" id="overall-missed">0</span></div>
        </div>
        <p class="note" id="overall-required"></p>
        <p class="note" id="overall-motivational"></p>
        <svg class="chart" id="overall-chart" viewBox="0 0 600 300" role="img" aria-label="Attendance overview"></svg>
      </div>
    </section>

    <section class="tab-content card" id="subjects">
      <div class="fields">
        <label>Subject name
          <input id="subject-name" type="text" />
        </label>
        <label>Total lectures
          <input id="subject-total" type="number" min="1" inputmode="numeric" />
        </label>
        <label>Attended lectures
          <input id="subject-attended" type="number" min="0" inputmode="numeric" />
        </label>
      </div>
      <span class="error" id="subject-error"></span>
      <div class="actions">
        <button class="btn-primary" id="add-subject-btn" type="button">Add subject</button>
        <button class="btn-secondary" id="subjects-reset-btn" type="button">Reset all</button>
      </div>

      <div class="subject-list" id="subject-list"></div>

      <div class="result" id="subject-result">
        <div class="headline">
          <span class="percentage" id="subject-percentage">0.0%</span>
          <span class="status-badge" id="subject-status"></span>
        </div>
        <div class="stats">
          <div class="stat"><span class="label">Subjects</span><span class="value" id="subject-count">0</span></div>
          <div class="stat"><span class="label">Eligible</span><span class="value" id="eligible-count">0</span></div>
          <div class="stat"><span class="label">Not eligible</span><span class="value" id="not-eligible-count">0</span></div>
        </div>
        <svg class="chart" id="subject-chart" viewBox="0 0 600 300" role="img" aria-label="Subject-wise attendance"></svg>
      </div>
    </section>
  </main>

  <script>
    const $ = (id) => document.getElementById(id);
    const svgNs = 'http://www.w3.org/2000/svg';
    const drawn = { overall: null, subjects: null };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      })[ch]);

    const clearErrors = () => {
      ['total-error', 'attended-error', 'subject-error'].forEach((id) => {
        $(id).textContent = '';
      });
    };

    const showError = (field, message) => {
      const target = field === 'subject' ? 'subject-error' : `${field}-error`;
      $(target).textContent = message;
    };

    const setBadge = (el, eligible) => {
      el.className = `status-badge ${eligible ? 'eligible' : 'not-eligible'}`;
      el.textContent = eligible ? 'Eligible' : 'Not Eligible';
    };

    const svg = (tag, attrs, text) => {
      const el = document.createElementNS(svgNs, tag);
      Object.entries(attrs).forEach(([key, value]) => el.setAttribute(key, value));
      if (text !== undefined) {
        el.textContent = text;
      }
      return el;
    };

    const drawTitle = (el, frame) => {
      el.appendChild(svg('text', {
        x: 300, y: 24, 'text-anchor': 'middle', fill: frame.text_color,
        'font-size': 18, 'font-weight': 600
      }, frame.title));
    };

    const drawDoughnut = (el, frame) => {
      const total = frame.values.reduce((sum, v) => sum + v, 0);
      const cx = 300, cy = 150, outer = 100, inner = 60;
      let angle = -Math.PI / 2;
      frame.values.forEach((value, i) => {
        if (value <= 0 || total <= 0) {
          return;
        }
        const sweep = (value / total) * Math.PI * 2;
        if (sweep >= Math.PI * 2 - 1e-6) {
          el.appendChild(svg('circle', {
            cx, cy, r: (outer + inner) / 2, fill: 'none',
            stroke: frame.colors[i], 'stroke-width': outer - inner
          }));
        } else {
          const end = angle + sweep;
          const large = sweep > Math.PI ? 1 : 0;
          const p = (r, a) => `${cx + r * Math.cos(a)} ${cy + r * Math.sin(a)}`;
          const d = `M ${p(outer, angle)} A ${outer} ${outer} 0 ${large} 1 ${p(outer, end)} ` +
            `L ${p(inner, end)} A ${inner} ${inner} 0 ${large} 0 ${p(inner, angle)} Z`;
          const slice = svg('path', { d, fill: frame.colors[i], stroke: frame.border_colors[i], 'stroke-width': 2 });
          slice.appendChild(svg('title', {}, `${frame.labels[i]}: ${value}`));
          el.appendChild(slice);
          angle = end;
        }
      });
      frame.labels.forEach((label, i) => {
        const x = 220 + i * 110;
        el.appendChild(svg('rect', { x, y: 272, width: 14, height: 14, rx: 3, fill: frame.colors[i] }));
        el.appendChild(svg('text', { x: x + 20, y: 284, fill: frame.text_color, 'font-size': 14 }, label));
      });
    };

    const drawBars = (el, frame) => {
      const left = 48, right = 576, top = 44, bottom = 260;
      const height = bottom - top;
      for (let tick = 0; tick <= 100; tick += 25) {
        const y = bottom - (tick / 100) * height;
        el.appendChild(svg('line', { x1: left, y1: y, x2: right, y2: y, stroke: frame.text_color, 'stroke-opacity': 0.1 }));
        el.appendChild(svg('text', { x: left - 8, y: y + 4, 'text-anchor': 'end', fill: frame.text_color, 'font-size': 12 }, `${tick}%`));
      }
      const slot = (right - left) / Math.max(frame.values.length, 1);
      const width = Math.min(slot * 0.6, 80);
      frame.values.forEach((value, i) => {
        const x = left + slot * i + (slot - width) / 2;
        const barHeight = (Math.min(value, 100) / 100) * height;
        const bar = svg('rect', {
          x, y: bottom - barHeight, width, height: barHeight, rx: 8,
          fill: frame.colors[i], stroke: frame.border_colors[i], 'stroke-width': 2
        });
        bar.appendChild(svg('title', {}, frame.tooltips[i] || `${value.toFixed(1)}%`));
        el.appendChild(bar);
        el.appendChild(svg('text', {
          x: x + width / 2, y: bottom + 18, 'text-anchor': 'middle', fill: frame.text_color, 'font-size': 12
        }, frame.labels[i]));
      });
    };

    const drawChart = (key, el, frame) => {
      if (!frame) {
        el.innerHTML = '';
        drawn[key] = null;
        return;
      }
      if (drawn[key] === frame.handle) {
        return;
      }
      el.innerHTML = '';
      drawTitle(el, frame);
      if (frame.kind === 'doughnut') {
        drawDoughnut(el, frame);
      } else {
        drawBars(el, frame);
      }
      drawn[key] = frame.handle;
    };

    const renderOverall = (view) => {
      const result = $('overall-result');
      const overall = view.overall;
      result.classList.toggle('visible', Boolean(overall));
      if (overall) {
        $('overall-percentage').textContent = `${overall.percentage_label}%`;
        $('overall-total').textContent = overall.total;
        $('overall-attended').textContent = overall.attended;
        $('overall-missed').textContent = overall.missed;
        setBadge($('overall-status'), overall.eligible);
        $('overall-required').style.display = overall.eligible ? 'none' : 'block';
        $('overall-required').textContent = overall.eligible
          ? ''
          : `Need ${overall.required} more lecture(s) for 75%`;
        $('overall-motivational').style.display = overall.eligible ? 'block' : 'none';
        $('overall-motivational').textContent = overall.message || '';
      }
      drawChart('overall', $('overall-chart'), view.overall_chart);
    };

    const renderSubjects = (view) => {
      const list = $('subject-list');
      if (!view.subjects.length) {
        list.innerHTML = '<div class="empty-state">No subjects added yet. Add your first subject above!</div>';
      } else {
        list.innerHTML = view.subjects.map((subject) => `
          <div class="subject-item">
            <div>
              <h4>${escapeHtml(subject.name)}</h4>
              <p>Total: ${subject.total} | Attended: ${subject.attended} | Missed: ${subject.missed}</p>
              ${subject.eligible ? '' : `<p class="shortfall">Need ${subject.required} more lecture(s) for 75%</p>`}
            </div>
            <div>
              <div class="subject-percentage">${subject.percentage_label}%</div>
              <span class="status-badge ${subject.eligible ? 'eligible' : 'not-eligible'}">
                ${subject.eligible ? 'Eligible' : 'Not Eligible'}
              </span>
            </div>
            <button class="delete-btn" type="button" data-id="${subject.id}" aria-label="Delete ${escapeHtml(subject.name)}">Delete</button>
          </div>
        `).join('');
      }

      const aggregate = view.aggregate;
      $('subject-result').classList.toggle('visible', Boolean(aggregate));
      if (aggregate) {
        $('subject-percentage').textContent = `${aggregate.percentage_label}%`;
        setBadge($('subject-status'), aggregate.eligible);
        $('subject-count').textContent = aggregate.subject_count;
        $('eligible-count').textContent = aggregate.eligible_count;
        $('not-eligible-count').textContent = aggregate.not_eligible_count;
      }
      drawChart('subjects', $('subject-chart'), view.subject_chart);
    };

    const render = (view) => {
      document.body.dataset.theme = view.theme;
      $('theme-toggle').textContent = view.toggle_label;
      renderOverall(view);
      renderSubjects(view);
    };

    const request = async (method, url, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      const data = await res.json();
      if (!res.ok) {
        showError(data.field || 'subject', data.message || 'Request failed');
        return false;
      }
      render(data);
      return true;
    };

    const calculate = () => {
      clearErrors();
      return request('POST', '/api/overall', {
        total: $('total-lectures').value,
        attended: $('attended-lectures').value
      });
    };

    const resetOverall = () => {
      $('total-lectures').value = '';
      $('attended-lectures').value = '';
      clearErrors();
      return request('POST', '/api/overall/reset');
    };

    const addSubject = async () => {
      clearErrors();
      const added = await request('POST', '/api/subjects', {
        name: $('subject-name').value,
        total: $('subject-total').value,
        attended: $('subject-attended').value
      });
      if (added) {
        ['subject-name', 'subject-total', 'subject-attended'].forEach((id) => {
          $(id).value = '';
        });
      }
    };

    const resetSubjects = () => {
      ['subject-name', 'subject-total', 'subject-attended'].forEach((id) => {
        $(id).value = '';
      });
      clearErrors();
      return request('POST', '/api/subjects/reset');
    };

    document.querySelectorAll('.tab').forEach((tab) => {
      tab.addEventListener('click', () => {
        document.querySelectorAll('.tab').forEach((other) => {
          const active = other === tab;
          other.classList.toggle('active', active);
          other.setAttribute('aria-selected', String(active));
        });
        document.querySelectorAll('.tab-content').forEach((content) => {
          content.classList.toggle('active', content.id === tab.dataset.tab);
        });
      });
    });

    $('calculate-btn').addEventListener('click', calculate);
    $('overall-reset-btn').addEventListener('click', resetOverall);
    $('add-subject-btn').addEventListener('click', addSubject);
    $('subjects-reset-btn').addEventListener('click', resetSubjects);
    $('theme-toggle').addEventListener('click', () => request('POST', '/api/theme/toggle'));

    $('subject-list').addEventListener('click', (event) => {
      const button = event.target.closest('.delete-btn');
      if (button) {
        request('DELETE', `/api/subjects/${button.dataset.id}`);
      }
    });

    document.addEventListener('keydown', (event) => {
      if (event.key !== 'Enter') {
        return;
      }
      const id = event.target.id;
      if (id === 'total-lectures' || id === 'attended-lectures') {
        calculate();
      } else if (id === 'subject-attended') {
        addSubject();
      }
    });

    request('GET', '/api/state');
  </script>
</body>
</html>
"#;
