/// Placeholder file kept next to the events, never an event itself
pub const TEMPLATE_RESOURCE: &str = "event_template.json";

pub const DEFAULT_EVENT_FILES: [&str; 58] = [
    "adapta_summit_2025.json",
    "agtech_meeting_2025.json",
    "ai_summit_bix_2025.json",
    "ai_summit_brasil_sp_2025.json",
    "ai_workshop_march.json",
    "bate_papo_ia_futuro_trabalho_2025.json",
    "big_data_brazil_experience_2025.json",
    "biotech_agro_health_2025.json",
    "bootcamp_ia_negocios_2025.json",
    "cbta_2025.json",
    "cidia_2025.json",
    "conecta_industria_2025.json",
    "conexao_mulher_ia_2025.json",
    "conferences.json",
    "curso_aplicacao_ia_trabalho_2025.json",
    "curso_ia_generativa_encantado_2025.json",
    "curso_ia_generativa_ensino_2025.json",
    "curso_ia_teoria_pratica_2025.json",
    "data_science_summit_2025.json",
    "deep_learning_course.json",
    "encontro_ia_politica_2025.json",
    "eramia_rs_2025.json",
    "expoinovacao_2025.json",
    "futurecom_2025.json",
    "genai_summit.json",
    "hackathon_innova_saude_2025.json",
    "health_meeting_brasil_2025.json",
    "ia_conference_brasil_2025.json",
    "ia_summit_blumenau_2025.json",
    "ia_summit_upf_2025.json",
    "icbdai_porto_alegre_2025.json",
    "icbdai_sao_paulo_2025.json",
    "icml_2025.json",
    "imersao_ia_pratica_negocios_2025.json",
    "innovation_week_sjc_2025.json",
    "inovar_sc_2025.json",
    "live_sbagro_ia_2025.json",
    "mercopar_2025.json",
    "neurips_2025.json",
    "r_day_2025.json",
    "rio_preto_tech_summit_2025.json",
    "rpa_ai_congress_curitiba_2025.json",
    "sao_paulo_tech_week_2025.json",
    "semana_caldeira_2025.json",
    "semana_de_dados_2025.json",
    "seminario_automacao_isa_2025.json",
    "seminario_pesquisa_ia_generativa_2025.json",
    "simposio_simplas_2025.json",
    "smart_energy_2025.json",
    "south_stat_meeting_2025.json",
    "startup_investment_summit_2025.json",
    "startup_summit_2025.json",
    "super_bots_experience_2025.json",
    "tdc_sao_paulo_2025.json",
    "techstars_weekend_ai_curitiba_2025.json",
    "urban_tech_forum_2025.json",
    "workshop_fig_ladm_3d_2025.json",
    "workshop_rh_okrs_ia_2025.json",
];
