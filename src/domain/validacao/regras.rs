// src/domain/validacao/regras.rs
//
// Field validators
//
// Each rule takes the value, the message to report and the collector.
// A passing value is a no-op; a failing one appends the message. Rules never
// return early or fail the caller themselves.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use uuid::Uuid;

use super::ResultadoValidacao;

/// Text must contain something other than whitespace
pub fn validar_obrigatorio(valor: &str, mensagem: &str, resultado: &mut ResultadoValidacao) {
    if valor.trim().is_empty() {
        resultado.add_error(mensagem);
    }
}

/// Text length (in chars) must lie within `minimo..=maximo`.
/// A minimum of 0 is treated as 1.
pub fn validar_tamanho(
    valor: &str,
    minimo: usize,
    maximo: usize,
    mensagem: &str,
    resultado: &mut ResultadoValidacao,
) {
    let minimo = minimo.max(1);
    let tamanho = valor.chars().count();
    if tamanho < minimo || tamanho > maximo {
        resultado.add_error(mensagem);
    }
}

/// Optional text: only checked when present
pub fn validar_tamanho_opcional(
    valor: Option<&str>,
    minimo: usize,
    maximo: usize,
    mensagem: &str,
    resultado: &mut ResultadoValidacao,
) {
    if let Some(valor) = valor {
        validar_tamanho(valor, minimo, maximo, mensagem, resultado);
    }
}

pub fn validar_expressao(
    valor: &str,
    padrao: &Regex,
    mensagem: &str,
    resultado: &mut ResultadoValidacao,
) {
    if !padrao.is_match(valor) {
        resultado.add_error(mensagem);
    }
}

pub fn validar_id(valor: Uuid, mensagem: &str, resultado: &mut ResultadoValidacao) {
    if valor.is_nil() {
        resultado.add_error(mensagem);
    }
}

/// The minimum representable instant is the "unset" sentinel
pub fn validar_data_valida(data: DateTime<Utc>, mensagem: &str, resultado: &mut ResultadoValidacao) {
    if data == DateTime::<Utc>::MIN_UTC {
        resultado.add_error(mensagem);
    }
}

pub fn validar_data_nao_futura(
    data: DateTime<Utc>,
    mensagem: &str,
    resultado: &mut ResultadoValidacao,
) {
    if data > Utc::now() {
        resultado.add_error(mensagem);
    }
}

/// `data` must be at or after `minima`
pub fn validar_data_minima(
    data: DateTime<Utc>,
    minima: DateTime<Utc>,
    mensagem: &str,
    resultado: &mut ResultadoValidacao,
) {
    if data < minima {
        resultado.add_error(mensagem);
    }
}

/// Date-only counterpart: valid and not after today (UTC)
pub fn validar_data_sem_hora(data: NaiveDate, mensagem: &str, resultado: &mut ResultadoValidacao) {
    let instante = data.and_time(NaiveTime::MIN).and_utc();
    if instante == DateTime::<Utc>::MIN_UTC || data > Utc::now().date_naive() {
        resultado.add_error(mensagem);
    }
}

/// NaN never passes
pub fn validar_maior_que_zero<T>(valor: T, mensagem: &str, resultado: &mut ResultadoValidacao)
where
    T: PartialOrd + Default,
{
    if !(valor > T::default()) {
        resultado.add_error(mensagem);
    }
}

/// Inclusive range
pub fn validar_intervalo<T>(
    valor: T,
    minimo: T,
    maximo: T,
    mensagem: &str,
    resultado: &mut ResultadoValidacao,
) where
    T: PartialOrd,
{
    if valor < minimo || valor > maximo {
        resultado.add_error(mensagem);
    }
}

pub fn validar_nao_nulo<T>(valor: Option<&T>, mensagem: &str, resultado: &mut ResultadoValidacao) {
    if valor.is_none() {
        resultado.add_error(mensagem);
    }
}

/// Tax id: exactly 11 digits once `.`, `-`, `/` and spaces are ignored.
/// Check digits are not verified.
pub fn validar_cpf(cpf: &str, mensagem: &str, resultado: &mut ResultadoValidacao) {
    let formatacao_valida = cpf
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '/' | ' '));
    let digitos = cpf.chars().filter(|c| c.is_ascii_digit()).count();
    if !formatacao_valida || digitos != 11 {
        resultado.add_error(mensagem);
    }
}

pub fn padrao_email() -> &'static Regex {
    static PADRAO: OnceLock<Regex> = OnceLock::new();
    PADRAO.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn coletar(regra: impl FnOnce(&mut ResultadoValidacao)) -> Vec<String> {
        let mut resultado = ResultadoValidacao::new();
        regra(&mut resultado);
        resultado.erros().to_vec()
    }

    #[test]
    fn test_obrigatorio_rejects_whitespace() {
        assert_eq!(coletar(|r| validar_obrigatorio("  ", "vazio", r)), ["vazio"]);
        assert!(coletar(|r| validar_obrigatorio("x", "vazio", r)).is_empty());
    }

    #[test]
    fn test_tamanho_treats_zero_minimum_as_one() {
        assert_eq!(coletar(|r| validar_tamanho("", 0, 8, "cep", r)), ["cep"]);
        assert!(coletar(|r| validar_tamanho("1", 0, 8, "cep", r)).is_empty());
        assert_eq!(coletar(|r| validar_tamanho("123456789", 0, 8, "cep", r)), ["cep"]);
    }

    #[test]
    fn test_tamanho_counts_chars_not_bytes() {
        // 3 chars, 6 bytes
        assert!(coletar(|r| validar_tamanho("ção", 3, 3, "nome", r)).is_empty());
    }

    #[test]
    fn test_tamanho_opcional_skips_none() {
        assert!(coletar(|r| validar_tamanho_opcional(None, 0, 25, "tel", r)).is_empty());
        assert_eq!(
            coletar(|r| validar_tamanho_opcional(Some("9".repeat(26).as_str()), 0, 25, "tel", r)),
            ["tel"]
        );
    }

    #[test]
    fn test_email_pattern() {
        let padrao = padrao_email();
        assert!(coletar(|r| validar_expressao("x@y.com", padrao, "email", r)).is_empty());
        assert_eq!(coletar(|r| validar_expressao("x@y", padrao, "email", r)), ["email"]);
        assert_eq!(coletar(|r| validar_expressao("x y@z.com", padrao, "email", r)), ["email"]);
    }

    #[test]
    fn test_id_rejects_nil() {
        assert_eq!(coletar(|r| validar_id(Uuid::nil(), "id", r)), ["id"]);
        assert!(coletar(|r| validar_id(Uuid::new_v4(), "id", r)).is_empty());
    }

    #[test]
    fn test_datas() {
        let agora = Utc::now();
        assert_eq!(
            coletar(|r| validar_data_nao_futura(agora + Duration::days(1), "futura", r)),
            ["futura"]
        );
        assert!(coletar(|r| validar_data_nao_futura(agora, "futura", r)).is_empty());
        assert_eq!(
            coletar(|r| validar_data_valida(DateTime::<Utc>::MIN_UTC, "invalida", r)),
            ["invalida"]
        );
        assert_eq!(
            coletar(|r| validar_data_minima(agora - Duration::hours(1), agora, "antes", r)),
            ["antes"]
        );
    }

    #[test]
    fn test_data_sem_hora() {
        let hoje = Utc::now().date_naive();
        assert!(coletar(|r| validar_data_sem_hora(hoje, "nasc", r)).is_empty());
        assert_eq!(
            coletar(|r| validar_data_sem_hora(hoje + Duration::days(2), "nasc", r)),
            ["nasc"]
        );
        assert_eq!(coletar(|r| validar_data_sem_hora(NaiveDate::MIN, "nasc", r)), ["nasc"]);
    }

    #[test]
    fn test_numericos() {
        assert_eq!(coletar(|r| validar_maior_que_zero(0.0_f64, "valor", r)), ["valor"]);
        assert_eq!(coletar(|r| validar_maior_que_zero(f64::NAN, "valor", r)), ["valor"]);
        assert!(coletar(|r| validar_maior_que_zero(0.01_f64, "valor", r)).is_empty());
        assert_eq!(coletar(|r| validar_intervalo(201, 1, 200, "carga", r)), ["carga"]);
        assert!(coletar(|r| validar_intervalo(200, 1, 200, "carga", r)).is_empty());
    }

    #[test]
    fn test_cpf() {
        assert!(coletar(|r| validar_cpf("12345678909", "cpf", r)).is_empty());
        assert!(coletar(|r| validar_cpf("123.456.789-09", "cpf", r)).is_empty());
        assert_eq!(coletar(|r| validar_cpf("1234567890", "cpf", r)), ["cpf"]);
        assert_eq!(coletar(|r| validar_cpf("123a5678909", "cpf", r)), ["cpf"]);
    }

    #[test]
    fn test_nao_nulo() {
        assert_eq!(coletar(|r| validar_nao_nulo::<u8>(None, "nulo", r)), ["nulo"]);
        assert!(coletar(|r| validar_nao_nulo(Some(&1u8), "nulo", r)).is_empty());
    }
}
