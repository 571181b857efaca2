//! Built-in report templates (Tera / Jinja2 syntax).

pub const TEXT_NAME: &str = "evaluation.txt";

pub const TEXT: &str = "\
Evaluation {{ id }}
Recorded {{ timestamp }}

AVPU: {{ avpu_label }} (code {{ avpu_score }})
{% for row in rows -%}
{{ row.name }}: {{ row.score }} [{{ row.level_label }}]
{% endfor -%}
CAM-ICU: {% if cam_icu_positive %}positive{% else %}negative{% endif %}
{% if requires_review %}
ALERT: at least one score is HIGH ({{ flagged | join(sep=\", \") }}). Notify the team on duty.
{% else %}
No high-risk scores. Keep monitoring.
{% endif %}";

pub const HTML_NAME: &str = "evaluation.html";

pub const HTML: &str = r#"<section class="evaluation" data-id="{{ id }}">
  <p class="meta">AVPU: {{ avpu_label }} &middot; {{ timestamp }}</p>
  <table>
    {%- for row in rows %}
    <tr><th>{{ row.name }}</th><td>{{ row.score }}</td><td><span class="badge badge-{{ row.color }}">{{ row.level_label }}</span></td></tr>
    {%- endfor %}
    <tr><th>CAM-ICU</th><td colspan="2">{% if cam_icu_positive %}<span class="badge badge-red">Positive</span>{% else %}<span class="badge badge-green">Negative</span>{% endif %}</td></tr>
  </table>
  {%- if requires_review %}
  <p class="alert">Alert: at least one score is high ({{ flagged | join(sep=", ") }}).</p>
  {%- else %}
  <p class="note">No high-risk scores. Keep monitoring.</p>
  {%- endif %}
</section>
"#;
